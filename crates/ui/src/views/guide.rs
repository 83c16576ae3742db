use dioxus::prelude::*;
use flags_core::catalog::guide;
use flags_core::model::Language;

#[component]
pub fn GuideModal(language: Language, on_close: EventHandler<()>) -> Element {
    let guide = guide(language);

    rsx! {
        div { class: "modal-backdrop", onclick: move |_| on_close.call(()),
            div { class: "modal guide", onclick: move |evt| evt.stop_propagation(),
                h2 { "{guide.title}" }
                for part in guide.sections.iter() {
                    section { class: "guide-section",
                        h3 { "{part.title}" }
                        p { "{part.content}" }
                    }
                }
                button { class: "btn primary", onclick: move |_| on_close.call(()), "{guide.close}" }
            }
        }
    }
}
