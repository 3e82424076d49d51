use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::countdown::CountdownTimer;
use crate::components::upsell::UpsellModal;
use crate::config::{self, Checkout};

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    /// Opens the upsell instead of going straight to the essential checkout.
    pub on_essential: Callback<()>,
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let choose_essential = {
        let on_essential = props.on_essential.clone();
        Callback::from(move |_: MouseEvent| on_essential.emit(()))
    };

    html! {
        <section id={config::PRICING_ANCHOR} class="py-16 md:py-24 px-5 gradient-bg overflow-hidden">
            <div class="max-w-5xl mx-auto text-center">
                <h2 class="text-3xl md:text-5xl font-black mb-4 text-slate-900 uppercase tracking-tight">{"💥 ESCOLHA SUA OFERTA"}</h2>
                <p class="text-slate-600 font-medium mb-12">{"Acesso imediato após confirmação do pagamento."}</p>
                <div class="grid md:grid-cols-2 gap-8 items-center">
                    <div class="bg-white rounded-3xl p-8 border border-slate-200 shadow-lg text-left">
                        <h3 class="text-xl font-black text-slate-900 mb-2 uppercase">{"PROTOCOLO ESSENCIAL"}</h3>
                        <p class="text-slate-500 text-sm mb-6">{"O protocolo prático de 7 dias e as ferramentas base de organização."}</p>
                        <div class="mb-6">
                            <p class="text-slate-400 line-through text-sm font-bold">{"De R$ 47,00"}</p>
                            <div class="flex items-baseline space-x-1">
                                <span class="text-slate-900 font-bold text-xl">{"R$"}</span>
                                <span class="text-slate-900 font-black text-5xl">{"9,90"}</span>
                            </div>
                            <p class="text-slate-500 text-xs font-bold uppercase">{"Pagamento único"}</p>
                        </div>
                        <ul class="space-y-3 mb-8 text-slate-700 font-medium">
                            <li class="flex items-center space-x-2"><span class="text-green-500 font-bold">{"✓"}</span> <span>{"Protocolo 7 Dias (PDF)"}</span></li>
                            <li class="flex items-center space-x-2"><span class="text-green-500 font-bold">{"✓"}</span> <span>{"Ferramentas Mês a Mês"}</span></li>
                            <li class="flex items-center space-x-2 text-slate-400"><span>{"✕ Sem os Bônus Exclusivos"}</span></li>
                        </ul>
                        <button
                            onclick={choose_essential}
                            class="w-full bg-slate-800 hover:bg-slate-900 text-white font-black py-4 rounded-2xl transition-all uppercase"
                        >
                            {"COMPRAR ESSENCIAL"}
                        </button>
                    </div>
                    <div class="relative bg-white rounded-3xl p-8 border-4 border-pink-500 shadow-2xl text-left">
                        <div class="absolute -top-4 left-1/2 -translate-x-1/2 bg-pink-600 text-white text-xs font-black px-4 py-1.5 rounded-full uppercase tracking-widest">
                            {"MAIS VENDIDO"}
                        </div>
                        <h3 class="text-xl md:text-2xl font-black text-slate-900 mb-4 uppercase">{"PROTOCOLO 7D + MEGA BÔNUS"}</h3>
                        <div class="mb-6 text-center">
                            <CountdownTimer />
                            <p class="text-pink-600 text-xs font-bold mt-2">{"Oferta expira em 15 minutos!"}</p>
                        </div>
                        <div class="mb-6">
                            <p class="text-slate-400 line-through text-sm font-bold">{"De R$ 197,00"}</p>
                            <div class="flex items-baseline space-x-1">
                                <span class="text-pink-600 font-bold text-xl">{"R$"}</span>
                                <span class="text-pink-600 font-black text-6xl">{"24,90"}</span>
                            </div>
                            <p class="text-slate-500 text-xs font-bold uppercase">{"MELHOR CUSTO-BENEFÍCIO (PAGAMENTO ÚNICO)"}</p>
                        </div>
                        <ul class="space-y-3 mb-8 text-slate-700 font-medium">
                            { for COMPLETE_PERKS.iter().map(|perk| html! {
                                <li class="flex items-start space-x-2">
                                    <span class="text-green-500 font-bold">{"✓"}</span>
                                    <span>{*perk}</span>
                                </li>
                            }) }
                        </ul>
                        <a
                            href={Checkout::Complete.url()}
                            class="block w-full text-center bg-pink-600 hover:bg-pink-700 text-white font-black py-5 rounded-2xl shadow-xl transition-all text-lg uppercase"
                        >
                            {"QUERO O PACOTE COMPLETO"}
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

const COMPLETE_PERKS: [&str; 4] = [
    "Tudo do Protocolo Essencial",
    "MEGA PACOTE: 20 Bônus Exclusivos",
    "4 GUIAS PREMIUM (Sentimentos, Rotina, Rituais e Autocuidado)",
    "Acesso Vitalício e Suporte Prioritário",
];

/// Pricing cards plus the upsell they open.
#[function_component(PricingWithUpsell)]
pub fn pricing_with_upsell() -> Html {
    let upsell_open = use_state(|| false);

    let open = {
        let upsell_open = upsell_open.clone();
        Callback::from(move |_: ()| {
            log::info!("Essential plan chosen, showing upsell");
            upsell_open.set(true);
        })
    };
    let close = {
        let upsell_open = upsell_open.clone();
        Callback::from(move |_: ()| upsell_open.set(false))
    };

    html! {
        <>
            <UpsellModal is_open={*upsell_open} on_close={close} />
            <Pricing on_essential={open} />
        </>
    }
}
