use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::Checkout;

#[derive(Properties, PartialEq)]
pub struct UpsellModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

/// Last-chance offer shown when the essential plan is picked.
#[function_component(UpsellModal)]
pub fn upsell_modal(props: &UpsellModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicks inside the dialog must not reach the backdrop.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            class="fixed inset-0 z-[100] flex items-center justify-center p-4 bg-slate-900/90 backdrop-blur-sm"
            onclick={close}
        >
            <div
                class="bg-white rounded-[2.5rem] max-w-lg w-full overflow-hidden shadow-2xl border-4 border-pink-500"
                role="dialog"
                aria-modal="true"
                onclick={keep_open}
            >
                <div class="bg-pink-600 text-white py-4 px-6 text-center">
                    <h4 class="text-xl md:text-2xl font-black uppercase tracking-tighter italic">{"😱 ESPERA! NÃO VÁ AINDA..."}</h4>
                </div>
                <div class="p-8 text-center">
                    <p class="text-slate-800 text-lg md:text-xl font-bold mb-6">
                        {"Você escolheu o plano essencial, mas temos uma "}
                        <span class="text-pink-600">{"oportunidade única"}</span>
                        {" para você agora!"}
                    </p>
                    <div class="bg-pink-50 rounded-2xl p-6 border-2 border-dashed border-pink-200 mb-8">
                        <p class="text-slate-600 text-sm font-medium mb-2 uppercase tracking-widest">{"Leve o Pacote Completo + Todos os Bônus"}</p>
                        <div class="flex items-center justify-center space-x-2">
                            <span class="text-slate-400 line-through text-lg font-bold">{"R$ 197"}</span>
                            <span class="text-slate-900 font-black text-4xl">{"R$ 19,90"}</span>
                        </div>
                        <p class="text-pink-600 font-bold text-xs mt-2 italic animate-pulse">{"✨ Economia de mais de R$ 170 reais ✨"}</p>
                    </div>
                    <div class="space-y-4">
                        <a
                            href={Checkout::UpsellComplete.url()}
                            class="block w-full bg-pink-600 text-white font-black py-5 rounded-2xl hover:bg-pink-700 transition-all shadow-xl shadow-pink-200 text-lg uppercase tracking-tight"
                        >
                            {"SIM! QUERO O PACOTE COMPLETO POR 19,90"}
                        </a>
                        <a
                            href={Checkout::Essential.url()}
                            class="block w-full text-slate-400 font-bold py-2 text-sm hover:text-slate-600 transition-colors"
                        >
                            {"Não, quero somente o protocolo de 9,90 mesmo"}
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
