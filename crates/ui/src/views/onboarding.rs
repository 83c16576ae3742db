use dioxus::prelude::*;
use flags_core::catalog::ui_text;
use flags_core::machine::AppEvent;
use flags_core::model::{Gender, Language};

use crate::views::state::{dispatch, use_machine};
use crate::vm::OnboardingVm;

#[component]
pub fn OnboardingView(on_guide: EventHandler<()>) -> Element {
    let machine = use_machine();
    let language = machine.read().language();
    let mut form = use_signal(|| OnboardingVm::new(language));

    let vm = form.read().clone();
    let text = ui_text(vm.language());
    let draft = vm.draft().clone();
    let can_submit = vm.can_submit();

    let mut switch_language = move |next: Language| {
        let mut machine = machine;
        if machine.write().set_language(next).is_ok() {
            form.write().set_language(next);
        }
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        match form.read().submit() {
            Ok(profile) => dispatch(machine, AppEvent::ProfileSubmitted(profile)),
            Err(err) => tracing::debug!(error = %err, "profile not ready"),
        }
    };

    rsx! {
        div { class: "page onboarding",
            div { class: "topbar",
                button {
                    class: "icon-btn admin-btn",
                    title: "Admin Panel",
                    onclick: move |_| dispatch(machine, AppEvent::OpenAdmin),
                    "🛡"
                }
                div { class: "lang-switch",
                    for lang in Language::ALL {
                        button {
                            class: if lang == vm.language() { "lang active" } else { "lang" },
                            onclick: move |_| switch_language(lang),
                            {lang.switcher_label()}
                        }
                    }
                }
            }

            header { class: "hero",
                h1 { class: "title", "{text.title}" }
                p { class: "subtitle", "{text.subtitle}" }
            }

            form { class: "card form", onsubmit: submit,
                label { class: "field",
                    span { "📞 {text.phone_label}" }
                    input {
                        r#type: "tel",
                        placeholder: "+7 (7xx) xxx-xx-xx",
                        value: "{draft.phone}",
                        oninput: move |evt| form.write().set_phone(evt.value()),
                    }
                    small { class: "hint", "{text.phone_hint}" }
                }

                label { class: "field",
                    span { "📅 {text.age_label}" }
                    input {
                        r#type: "number",
                        min: "16",
                        max: "99",
                        value: vm.age_input().to_string(),
                        oninput: move |evt| form.write().set_age_input(evt.value()),
                    }
                }

                div { class: "field",
                    span { "👤 {text.gender_label}" }
                    div { class: "segmented",
                        for gender in Gender::ALL {
                            button {
                                r#type: "button",
                                class: if gender == draft.gender { "segment active" } else { "segment" },
                                onclick: move |_| form.write().set_gender(gender),
                                {text.gender(gender)}
                            }
                        }
                    }
                }

                label { class: "field",
                    span { "📍 {text.region_label}" }
                    select {
                        value: "{draft.region}",
                        onchange: move |evt| form.write().set_region(evt.value()),
                        for region in vm.region_options().iter() {
                            option {
                                value: "{region}",
                                selected: *region == draft.region,
                                "{region}"
                            }
                        }
                    }
                }

                button {
                    class: "btn primary start",
                    r#type: "submit",
                    disabled: !can_submit,
                    "{text.start_btn}"
                }
            }

            button { class: "btn link guide-btn", onclick: move |_| on_guide.call(()), "{text.guide_btn}" }
        }
    }
}
