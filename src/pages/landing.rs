use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::counter::Counter;
use crate::components::faq::FaqItem;
use crate::components::notification::SocialProofToast;
use crate::components::promo_bar::PromoBar;
use crate::config;
use crate::pages::pricing::PricingWithUpsell;

pub fn scroll_to_anchor(id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    match element {
        Some(element) => element.scroll_into_view(),
        None => log::warn!("Anchor #{} not found", id),
    }
}

fn scroll_to_pricing() -> Callback<MouseEvent> {
    Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor(config::PRICING_ANCHOR);
    })
}

struct DayBlock {
    days: &'static str,
    title: &'static str,
    step: u8,
    text: &'static str,
}

const DAY_BLOCKS: [DayBlock; 4] = [
    DayBlock { days: "Dia 1", title: "Limpeza do Caos", step: 1, text: "Organização mental + centralização de tudo em um único lugar." },
    DayBlock { days: "Dias 2 e 3", title: "Rotina em Ordem", step: 2, text: "Planejamento semanal, prioridades claras e fim do improviso." },
    DayBlock { days: "Dias 4 e 5", title: "Dinheiro Sob Controle", step: 3, text: "Mapeamento de gastos, controle simples e eliminação de vazamentos." },
    DayBlock { days: "Dias 6 e 7", title: "Manutenção Prática", step: 4, text: "Como manter tudo funcionando sem recomeçar do zero." },
];

const IDENTIFICATION: [&str; 5] = [
    "Você sente que trabalha, se esforça, mas o dinheiro nunca sobra?",
    "Tem a sensação de que faz muito e não sai do lugar?",
    "Chega no fim do dia esgotada e sem tempo pra você?",
    "Vive gastando por impulso ou conveniência porque está sempre correndo?",
    "Quer começar novos projetos, mas a procrastinação vence sempre?",
];

struct ToolGroup {
    title: &'static str,
    items: &'static [&'static str],
    note: Option<&'static str>,
}

const TOOL_GROUPS: [ToolGroup; 4] = [
    ToolGroup {
        title: "Organização pessoal e autocuidado",
        items: &["Controle de hábitos", "Autoconhecimento e espiritualidade", "Skincare", "Controle de menstruação", "Metas de relacionamento"],
        note: None,
    },
    ToolGroup {
        title: "Planejamento de vida e projetos",
        items: &["Roda da Vida", "Metas estratégicas", "Plano de ação", "Planejamento semanal", "Organização profissional", "Controle financeiro mensal"],
        note: None,
    },
    ToolGroup {
        title: "Organização da casa",
        items: &["Lista de compras", "Cardápio semanal", "Controle de limpeza"],
        note: None,
    },
    ToolGroup {
        title: "Planejamento de viagem",
        items: &[],
        note: Some("Planejamento completo e detalhado para suas próximas férias sem sustos financeiros."),
    },
];

struct BonusGuide {
    title: &'static str,
    text: &'static str,
    price: &'static str,
}

const BONUS_GUIDES: [BonusGuide; 4] = [
    BonusGuide { title: "Planner Meus Sentimentos", text: "Acompanhe emoções, energia, água e exercícios diariamente de forma intuitiva.", price: "R$ 37" },
    BonusGuide { title: "Guia Planejamento de Rotina", text: "Organize seu tempo diário e semanal sem sacrificar sua saúde mental.", price: "R$ 27" },
    BonusGuide { title: "Guia Ritual Matinal e Noturno", text: "Crie rituais simples que sustentam sua rotina e foco o dia todo.", price: "R$ 47" },
    BonusGuide { title: "Rotinas de Autocuidado", text: "Estratégias poderosas de cuidado pessoal para mulheres com pouco tempo.", price: "R$ 47" },
];

struct ExtraCategory {
    icon: &'static str,
    title: &'static str,
    /// (tool, what it is for)
    tools: &'static [(&'static str, &'static str)],
}

const EXTRA_CATEGORIES: [ExtraCategory; 6] = [
    ExtraCategory {
        icon: "🧠",
        title: "Clareza & Decisão",
        tools: &[
            ("Checklist “Semana Sob Controle”", "(PDF prático – 1 página) → Para não esquecer nada"),
            ("Mapa Visual da Vida Próspera", "(Imagem + guia) → Tudo o que importa em uma folha"),
            ("Lista Antiprocrastinação", "(Printável) → Quando bater preguiça ou cansaço"),
            ("Roteiro de Decisão Rápida", "(Framework) → Evita indecisão e gastos por impulso"),
        ],
    },
    ExtraCategory {
        icon: "⏰",
        title: "Tempo & Produtividade",
        tools: &[
            ("Ladrões de Tempo", "(Checklist) → Para eliminar distrações sem culpa"),
            ("Tabela “Vale a Pena ou Não?”", "(Tempo x Dinheiro) → Antes de gastar com conveniência"),
            ("Organização do Domingo à Noite", "(Passo a passo) → Mantenha a semana organizada"),
            ("Template Prioridades (Método 3×3)", "→ Só 3 prioridades reais por área"),
        ],
    },
    ExtraCategory {
        icon: "💸",
        title: "Controle Financeiro",
        tools: &[
            ("Gastos Invisíveis Femininos", "(Checklist) → Beleza, delivery, apps, etc"),
            ("Planilha “Dinheiro Consciente”", "(Minimalista) → Sem categorias complexas"),
            ("Revisão Financeira de 15 min", "(Roteiro) → Manter controle sem sofrimento"),
            ("Desafio 7 Dias Sem Vazamento", "(Mini-desafio) → Acelera resultados imediatos"),
        ],
    },
    ExtraCategory {
        icon: "🧘‍♀️",
        title: "Energia & Emocional",
        tools: &[
            ("Áudio: Organização Mental", "(10 min) → Para usar antes de planejar o dia"),
            ("Áudio: Reset Emocional", "Para dias caóticos → Evita decisões impulsivas"),
            ("Lista de Autocuidado Essencial", "Sem luxo, sem culpa → O mínimo para funcionar bem"),
        ],
    },
    ExtraCategory {
        icon: "🏠",
        title: "Rotina Doméstica",
        tools: &[
            ("Casa em Ordem (30 min/dia)", "(Roteiro) → Sem faxina pesada"),
            ("Lista Mestre de Compras", "(Econômica) → Reduz desperdício drasticamente"),
        ],
    },
    ExtraCategory {
        icon: "🎯",
        title: "Consistência",
        tools: &[
            ("Calendário de Manutenção Mensal", "Não deixa a rotina desandar"),
            ("Guia “Como Voltar em 1 Dia”", "Se você sair do protocolo → Elimina a culpa"),
            ("Contrato Pessoal de Compromisso", "(Printável) → Aumenta taxa de execução absurda"),
        ],
    },
];

const FOR_WHOM: [&str; 4] = [
    "Mulheres sobrecarregadas com rotinas cheias",
    "Quem sente que o dinheiro escapa sem explicação",
    "Quem quer controle prático, não apenas motivação",
    "Quem está pronta para executar e ter resultados reais",
];

const NOT_FOR_WHOM: [&str; 4] = [
    "Quem busca um milagre sem nenhum esforço",
    "Quem compra apenas para acumular conteúdo",
    "Quem não pretende aplicar o método no dia a dia",
    "Quem não assume responsabilidade pelas próprias decisões",
];

pub struct Testimonial {
    pub name: &'static str,
    pub handle: &'static str,
    pub image: &'static str,
    pub content: &'static str,
}

const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Mariana Costa",
        handle: "@marianac_m",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150&h=150&fit=crop",
        content: "Eu achei que precisava ganhar mais pra sobrar dinheiro, mas vi que estava jogando quase 400 reais no lixo com bobeira.",
    },
    Testimonial {
        name: "Fernanda Lima",
        handle: "@fe_lima",
        image: "https://images.unsplash.com/photo-1508214751196-bcfd4ca60f91?w=150&h=150&fit=crop",
        content: "O Protocolo salvou meu casamento. A gente não brigou mais por conta de casa bagunçada e falta de tempo.",
    },
    Testimonial {
        name: "Juliana Silva",
        handle: "@jusilva_org",
        image: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=150&h=150&fit=crop",
        content: "Pela primeira vez em anos eu sei exatamente para onde meu dinheiro está indo. Sensação de liberdade total!",
    },
    Testimonial {
        name: "Beatriz Alves",
        handle: "@bia_alves",
        image: "https://images.unsplash.com/photo-1531123897727-8f129e1688ce?w=150&h=150&fit=crop",
        content: "Esses 7 dias mudaram meu ano. Já recuperei o valor do protocolo 20 vezes só em gastos que cortei.",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="min-h-screen antialiased bg-white">
            <PromoBar />
            <SocialProofToast />
            <Hero />
            <StatsBand />
            <Identification />
            <ProtocolBreakdown />
            <Tools />
            <BonusPack />
            <Audience />
            <Testimonials />
            <FinalWarning />
            <PricingWithUpsell />
            <Guarantee />
            <Faq />
            <FinalCta />
            <Footer />
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <header class="gradient-bg pt-10 md:pt-16 pb-16 md:pb-24 px-5 overflow-hidden">
            <div class="max-w-4xl mx-auto text-center relative">
                <div class="inline-block bg-pink-100 text-pink-600 px-4 py-1.5 rounded-full text-[10px] md:text-xs font-bold tracking-widest uppercase mb-6 animate-pulse border border-pink-200">
                    {"🚨 A transformação que você precisa"}
                </div>
                <h1 class="text-3xl md:text-6xl font-extrabold text-slate-900 leading-tight mb-6">
                    {"Em apenas 7 dias, você vai organizar sua rotina, recuperar seu dinheiro e "}
                    <span class="text-pink-600 italic underline decoration-pink-200">{"mudar o resto do seu ano"}</span>
                </h1>
                <div class="relative inline-block mb-10">
                    <div class="relative bg-white border-2 border-pink-100 px-6 py-4 md:px-12 md:py-6 rounded-2xl shadow-xl">
                        <h2 class="text-2xl md:text-5xl font-black text-slate-900 uppercase tracking-tighter leading-none">
                            <span class="text-pink-600">{"Protocolo"}</span>{" "}<span>{"Vida Próspera 7D"}</span>
                        </h2>
                    </div>
                </div>
                <p class="text-lg md:text-xl text-slate-700 font-medium mb-8 max-w-2xl mx-auto leading-relaxed">
                    {"O método prático para mulheres que trabalham muito, mas sentem que o dinheiro some no caos do dia a dia."}
                </p>
                <div class="bg-white/90 shadow-sm inline-block px-5 py-4 rounded-xl border border-pink-100 mb-10">
                    <p class="text-slate-600 text-sm md:text-base italic">
                        {"💡 Prosperidade não é sobre quanto você ganha, é sobre como você organiza o que já tem."}
                    </p>
                </div>
                <button
                    onclick={scroll_to_pricing()}
                    class="block w-full md:w-auto md:mx-auto bg-pink-600 hover:bg-pink-700 text-white font-extrabold text-lg md:text-xl px-12 py-5 rounded-2xl md:rounded-full shadow-xl transition-all mb-4"
                >
                    {"QUERO MUDAR MINHA VIDA AGORA"}
                </button>
                <p class="text-xs md:text-sm text-slate-400 font-medium">{"Acesso imediato • Pagamento Único • Garantia de 7 dias"}</p>
            </div>
        </header>
    }
}

#[function_component(StatsBand)]
fn stats_band() -> Html {
    html! {
        <section class="bg-slate-900 py-5 px-4">
            <div class="max-w-4xl mx-auto text-center text-white">
                <p class="text-base md:text-xl font-medium tracking-wide">
                    {"✨ "}
                    <span class="text-pink-400 font-bold text-xl md:text-2xl">
                        <Counter target={config::CUSTOMER_COUNT} duration_ms={config::CUSTOMER_COUNT_DURATION_MS} />{"+"}
                    </span>
                    {" mulheres já mudaram de vida com este método"}
                </p>
            </div>
        </section>
    }
}

#[function_component(Identification)]
fn identification() -> Html {
    html! {
        <section class="py-16 md:py-24 px-5 bg-white">
            <div class="max-w-3xl mx-auto">
                <h2 class="text-2xl md:text-3xl font-bold text-center mb-10 md:mb-14 text-slate-900 leading-tight uppercase">{"❓ Isso aqui tem a ver com você?"}</h2>
                <div class="space-y-4 md:space-y-6">
                    { for IDENTIFICATION.iter().map(|question| html! {
                        <div class="flex items-start space-x-3 md:space-x-4 p-4 md:p-5 border border-slate-100 rounded-2xl hover:bg-pink-50 transition-colors">
                            <div class="bg-pink-100 text-pink-600 p-1.5 rounded-full shrink-0">{"✓"}</div>
                            <p class="text-base md:text-lg text-slate-700 leading-tight font-medium">{*question}</p>
                        </div>
                    }) }
                </div>
                <div class="mt-12 md:mt-16 text-center px-4">
                    <p class="text-xl md:text-2xl font-bold text-slate-900 mb-2">{"👉 O problema não é falta de capacidade."}</p>
                    <p class="text-lg md:text-xl text-pink-600 font-semibold italic">{"É falta de um protocolo simples de organização."}</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(ProtocolBreakdown)]
fn protocol_breakdown() -> Html {
    html! {
        <section class="py-20 px-5 bg-white overflow-hidden border-t border-slate-100">
            <div class="max-w-4xl mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-3xl md:text-5xl font-black mb-6 text-slate-900 leading-tight uppercase tracking-tight">{"✅ O que é o PROTOCOLO VIDA PRÓSPERA 7D?"}</h2>
                    <div class="flex flex-wrap justify-center gap-4 mb-10">
                        { for ["✕ Não é um planner", "✕ Não é um curso longo", "✕ Não é motivação"].iter().map(|label| html! {
                            <span class="bg-red-50 text-red-600 border border-red-100 px-4 py-2 rounded-full font-bold text-sm">{*label}</span>
                        }) }
                    </div>
                    <div class="space-y-4 text-left max-w-2xl mx-auto bg-slate-50 p-8 rounded-3xl border border-slate-100 mb-16">
                        <p class="text-lg md:text-xl text-slate-800 font-bold flex items-start">
                            <span class="text-green-500 mr-3 text-2xl">{"✔️"}</span>
                            <span>{"É um "}<span class="text-pink-600 underline decoration-pink-200">{"PROTOCOLO DE EXECUÇÃO"}</span>{", com começo, meio e fim."}</span>
                        </p>
                        <p class="text-lg md:text-xl text-slate-800 font-bold flex items-start">
                            <span class="text-green-500 mr-3 text-2xl">{"✔️"}</span> <span>{"Criado para mulheres reais, com rotina cheia."}</span>
                        </p>
                        <p class="text-lg md:text-xl text-slate-800 font-bold flex items-start">
                            <span class="text-green-500 mr-3 text-2xl">{"✔️"}</span> <span>{"Resultados visíveis em 7 dias de aplicação prática."}</span>
                        </p>
                    </div>
                </div>
                <div class="relative">
                    <h3 class="text-2xl md:text-4xl font-black text-slate-900 mb-12 text-center uppercase tracking-tighter">{"🗓️ COMO FUNCIONA O PROTOCOLO (7 DIAS)"}</h3>
                    <div class="space-y-12 relative">
                        { for DAY_BLOCKS.iter().map(|block| html! {
                            <div class="flex flex-col md:flex-row items-center">
                                <div class="md:w-1/2 md:pr-12 md:text-right mb-4 md:mb-0">
                                    <h4 class="text-2xl font-black text-pink-600">{block.days}</h4>
                                    <p class="text-xl font-bold text-slate-900 uppercase tracking-tight">{block.title}</p>
                                </div>
                                <div class="z-10 bg-pink-600 text-white w-10 h-10 rounded-full flex items-center justify-center font-black shadow-lg">{block.step.to_string()}</div>
                                <div class="md:w-1/2 md:pl-12">
                                    <p class="text-slate-600 leading-relaxed font-medium">{block.text}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="mt-16 text-center">
                        <p class="text-xl md:text-2xl font-black text-slate-900">
                            {"🔥 Em 7 dias, você passa a ter tudo isso usando um único sistema simples."}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Tools)]
fn tools() -> Html {
    html! {
        <section class="py-16 md:py-24 px-5 bg-slate-50">
            <div class="max-w-5xl mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-3xl md:text-4xl font-black text-slate-900 uppercase mb-4">{"Uso digital ou impresso"}</h2>
                    <p class="text-slate-600 text-lg">{"As ferramentas fundamentais que você vai ter em mãos:"}</p>
                </div>
                <div class="grid md:grid-cols-2 gap-6">
                    { for TOOL_GROUPS.iter().map(|group| html! {
                        <div class="bg-white p-6 rounded-2xl border border-slate-100 shadow-sm">
                            <h4 class="text-lg font-black text-slate-900 mb-4 flex items-center">
                                <span class="mr-2">{"🔹"}</span> <span>{group.title}</span>
                            </h4>
                            {
                                if group.items.is_empty() {
                                    html! {}
                                } else {
                                    html! {
                                        <ul class="space-y-2 text-slate-600">
                                            { for group.items.iter().map(|item| html! { <li>{format!("• {}", item)}</li> }) }
                                        </ul>
                                    }
                                }
                            }
                            {
                                match group.note {
                                    Some(note) => html! { <p class="text-slate-600">{note}</p> },
                                    None => html! {},
                                }
                            }
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(BonusPack)]
fn bonus_pack() -> Html {
    html! {
        <section class="py-16 md:py-24 px-5 bg-slate-900 text-white">
            <div class="max-w-5xl mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-3xl md:text-5xl font-black uppercase tracking-tight mb-4">
                        {"🎁 MEGA PACOTE "}<br/>
                        <span class="text-pink-400">{"DE BÔNUS EXCLUSIVOS"}</span>
                    </h2>
                    <p class="text-slate-300 text-lg max-w-2xl mx-auto">
                        {"Estes materiais premium e ferramentas extras estão inclusos no seu acesso sem custo adicional se você garantir sua vaga hoje."}
                    </p>
                </div>
                <div class="grid md:grid-cols-2 gap-6 mb-16">
                    { for BONUS_GUIDES.iter().map(|guide| html! {
                        <div class="bg-slate-800 p-6 rounded-2xl border border-slate-700">
                            <div class="flex justify-between items-start mb-3">
                                <h4 class="text-lg font-black">{guide.title}</h4>
                                <div class="bg-pink-600 text-white text-[10px] font-black px-2 py-1 rounded-full uppercase shrink-0">{"GRÁTIS HOJE"}</div>
                            </div>
                            <p class="text-slate-300 text-sm mb-4">{guide.text}</p>
                            <div class="flex items-center space-x-2">
                                <span class="text-slate-500 line-through font-bold">{guide.price}</span>
                                <span class="text-green-400 font-black">{"por GRÁTIS"}</span>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="text-center mb-10">
                    <h3 class="text-2xl md:text-3xl font-black uppercase">
                        {"⚡ +20 FERRAMENTAS EXTRAS "}<span class="text-pink-400">{"(EM 6 CATEGORIAS)"}</span>
                    </h3>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for EXTRA_CATEGORIES.iter().map(|category| html! {
                        <div class="bg-slate-800 p-6 rounded-2xl border border-slate-700">
                            <h4 class="text-lg font-black mb-4 flex items-center space-x-2">
                                <span>{category.icon}</span> <span>{category.title}</span>
                            </h4>
                            <ul class="space-y-3">
                                { for category.tools.iter().map(|(tool, purpose)| html! {
                                    <li class="flex flex-col">
                                        <span class="text-white font-bold text-sm">{*tool}</span>
                                        <span class="text-slate-500 text-[11px] leading-tight">{*purpose}</span>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Audience)]
fn audience() -> Html {
    html! {
        <section class="py-16 md:py-24 px-5 bg-white">
            <div class="max-w-5xl mx-auto grid md:grid-cols-2 gap-8">
                <div class="bg-green-50 p-8 rounded-3xl border border-green-100">
                    <h3 class="text-xl md:text-2xl font-black text-slate-900 mb-6 flex items-center space-x-2">
                        <span>{"🎯"}</span>
                        <span>{"Este Protocolo É PARA VOCÊ:"}</span>
                    </h3>
                    <ul class="space-y-4">
                        { for FOR_WHOM.iter().map(|item| html! {
                            <li class="flex items-start space-x-3">
                                <span class="shrink-0">{"✔️"}</span>
                                <span class="text-slate-700 font-medium">{*item}</span>
                            </li>
                        }) }
                    </ul>
                </div>
                <div class="bg-red-50 p-8 rounded-3xl border border-red-100">
                    <h3 class="text-xl md:text-2xl font-black text-slate-900 mb-6 flex items-center space-x-2">
                        <span>{"❌"}</span>
                        <span>{"NÃO É PARA QUEM:"}</span>
                    </h3>
                    <ul class="space-y-4">
                        { for NOT_FOR_WHOM.iter().map(|item| html! {
                            <li class="flex items-start space-x-3">
                                <span class="shrink-0">{"✖️"}</span>
                                <span class="text-slate-700 font-medium">{*item}</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section class="py-16 md:py-24 px-5 bg-pink-50">
            <div class="max-w-5xl mx-auto text-center">
                <h2 class="text-3xl md:text-4xl font-black text-slate-900 mb-4">{"💬 O que elas estão dizendo..."}</h2>
                <p class="text-slate-600 mb-12">{"Resultados reais de quem parou de improvisar a própria rotina."}</p>
                <div class="grid md:grid-cols-2 gap-6 text-left">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <div class="bg-white p-6 rounded-2xl shadow-sm border border-pink-100">
                            <div class="flex items-center space-x-3 mb-4">
                                <img src={t.image} class="w-12 h-12 rounded-full object-cover" alt={t.name} />
                                <div>
                                    <p class="font-bold text-slate-900">{t.name}</p>
                                    <p class="text-sm text-slate-400">{t.handle}</p>
                                </div>
                            </div>
                            <p class="text-slate-700 italic">{format!("\"{}\"", t.content)}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(FinalWarning)]
fn final_warning() -> Html {
    html! {
        <section class="py-16 md:py-24 px-5 bg-slate-900 text-white">
            <div class="max-w-3xl mx-auto text-center">
                <h2 class="text-3xl md:text-5xl font-black mb-6">{"🚨 AVISO FINAL"}</h2>
                <p class="text-lg text-slate-300 mb-8">{"Se você continuar vivendo no improviso:"}</p>
                <ul class="space-y-4 mb-10 inline-block text-left">
                    { for ["Vai continuar cansada", "Vai continuar ocupada", "E o dinheiro vai continuar escapando"].iter().map(|line| html! {
                        <li class="flex items-center space-x-3 text-lg md:text-xl font-bold">
                            <span class="text-red-500">{"✕"}</span> <span>{*line}</span>
                        </li>
                    }) }
                </ul>
                <div class="bg-pink-600 p-6 rounded-2xl">
                    <p class="text-xl md:text-2xl font-black">
                        {"👉 Prosperidade não começa no bolso. "}<br />
                        {"Começa na rotina."}
                    </p>
                </div>
            </div>
        </section>
    }
}

#[function_component(Guarantee)]
fn guarantee() -> Html {
    html! {
        <section class="py-16 px-5 bg-white">
            <div class="max-w-4xl mx-auto flex flex-col md:flex-row items-center gap-8 bg-slate-50 p-8 rounded-3xl border border-slate-100">
                <div class="shrink-0">
                    <img src="https://cdn-icons-png.flaticon.com/512/3699/3699516.png" class="w-32 h-32" alt="Garantia" />
                </div>
                <div>
                    <h2 class="text-2xl md:text-3xl font-black text-slate-900 mb-4">{"🔐 GARANTIA INCONDICIONAL"}</h2>
                    <p class="text-slate-600 leading-relaxed">
                        {"Teste por 7 dias. Aplique o protocolo, use as ferramentas. Se você não sentir que sua rotina está mais organizada e que identificou desperdícios, seu acesso chegará via whatsapp alguns minutos após a compra de forma automática para facilitar seu suporte, e caso queira o reembolso devolvemos 100% do seu dinheiro. Nosso atendimento é humanizado e funciona 24 horas por dia. Sem perguntas, sem burocracia."}
                    </p>
                </div>
            </div>
        </section>
    }
}

#[function_component(Faq)]
fn faq() -> Html {
    html! {
        <section class="py-16 md:py-24 px-5 bg-white">
            <div class="max-w-3xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-black text-slate-900 text-center mb-10">{"Dúvidas Frequentes"}</h2>
                <div class="bg-white rounded-3xl border border-slate-100 px-6 md:px-10">
                    <FaqItem question="Como recebo meu acesso após a compra?">
                        <p>{"seu acesso chegara via whatsapp alguns minutos após a compra de forma automática. Nossa equipe entrará em contato com você diretamente através do WhatsApp. O atendimento é humanizado e funciona 24 horas por dia para garantir que você receba tudo corretamente."}</p>
                    </FaqItem>
                    <FaqItem question="Terei suporte para eventuais dúvidas?">
                        <p>{"Sim! Você terá suporte total através do nosso "}<strong>{"WhatsApp"}</strong>{". Contamos com uma equipe de atendimento humanizado disponível 24 horas por dia para te auxiliar em qualquer etapa da sua jornada."}</p>
                    </FaqItem>
                    <FaqItem question="Por quanto tempo terei acesso?">
                        <p>{"Acesso vitalício a todo conteúdo."}</p>
                    </FaqItem>
                    <FaqItem question="Posso usar as ferramentas de forma digital?">
                        <p>{"Terá acesso a versão em PDF das ferramentas. Caso possua tablet com editor de PDF conseguirá usar."}</p>
                    </FaqItem>
                    <FaqItem question="Terei acesso a versão para impressão?">
                        <p>{"Sim, receberá as ferramentas em PDF para impressão em tamanho A4 ou A5."}</p>
                    </FaqItem>
                </div>
            </div>
        </section>
    }
}

#[function_component(FinalCta)]
fn final_cta() -> Html {
    html! {
        <section class="relative py-20 md:py-28 px-5 bg-pink-600 text-white overflow-hidden">
            <div class="relative max-w-3xl mx-auto text-center">
                <h2 class="text-3xl md:text-5xl font-black mb-6 leading-tight">{"Não deixe sua vida no improviso por mais nenhum dia."}</h2>
                <p class="text-lg md:text-xl text-pink-100 mb-10">{"O caos custa caro. Comece sua Vida Próspera agora."}</p>
                <button
                    onclick={scroll_to_pricing()}
                    class="bg-white text-pink-600 font-black text-lg md:text-xl px-12 py-5 rounded-full shadow-2xl transition-all"
                >
                    {"QUERO COMEÇAR AGORA"}
                </button>
                <div class="flex justify-center items-center space-x-6 mt-10 opacity-80">
                    <img src="https://cdn-icons-png.flaticon.com/512/196/196578.png" class="h-8" alt="Visa" />
                    <img src="https://cdn-icons-png.flaticon.com/512/196/196561.png" class="h-8" alt="Mastercard" />
                    <img src="https://logodownload.org/wp-content/uploads/2020/02/pix-logo-1.png" class="h-8" alt="Pix" />
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="py-10 px-5 bg-slate-900 text-slate-400 text-center text-sm">
            <div class="max-w-4xl mx-auto">
                <div class="flex justify-center space-x-6 mb-6">
                    <a href="#" class="hover:text-pink-500 transition-colors">{"Políticas"}</a>
                    <a href="#" class="hover:text-pink-500 transition-colors">{"Termos"}</a>
                    <a href="#" class="hover:text-pink-500 transition-colors">{"Contato"}</a>
                </div>
                <p class="mb-4">{"© 2024 Protocolo Vida Próspera 7D • Todos os direitos reservados."}</p>
                <p class="text-xs text-slate-500 max-w-2xl mx-auto">{"Os resultados podem variar de pessoa para pessoa. O protocolo é uma ferramenta de auxílio e não substitui consultoria financeira profissional personalizada."}</p>
            </div>
        </footer>
    }
}
