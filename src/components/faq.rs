use stylist::css;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew::{Children, Properties};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Collapsed,
    Expanded,
}

impl Panel {
    pub fn toggled(self) -> Self {
        match self {
            Panel::Collapsed => Panel::Expanded,
            Panel::Expanded => Panel::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Panel::Expanded
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: String,
    pub children: Children,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let panel = use_state(Panel::default);

    let toggle = {
        let panel = panel.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            panel.set(panel.toggled());
        })
    };

    let answer = css!(
        r#"
        overflow: hidden;
        max-height: 0;
        transition: max-height 300ms ease, padding-bottom 300ms ease;

        &.open {
            max-height: 800px;
            padding-bottom: 1.5rem;
        }
    "#
    );
    let expanded = panel.is_expanded();

    html! {
        <div class="border-b border-slate-200 last:border-0">
            <button
                class="w-full py-6 flex justify-between items-center text-left focus:outline-none group"
                aria-expanded={expanded.to_string()}
                onclick={toggle}
            >
                <span class="text-lg md:text-xl font-bold text-slate-800 group-hover:text-pink-600 transition-colors">{&props.question}</span>
                <span class={classes!("text-pink-500", "transform", "transition-transform", "duration-300", expanded.then_some("rotate-180"))}>
                    <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7" />
                    </svg>
                </span>
            </button>
            <div class={classes!(answer, expanded.then_some("open"))}>
                <div class="text-slate-600 leading-relaxed md:text-lg">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Covers the `Panel` state machine only. Each `FaqItem` keeps its own
    /// `use_state`, which needs a browser to exercise.
    #[test]
    fn starts_collapsed_and_toggles_both_ways() {
        let panel = Panel::default();
        assert!(!panel.is_expanded());
        assert!(panel.toggled().is_expanded());
        assert_eq!(panel.toggled().toggled(), panel);
    }
}
