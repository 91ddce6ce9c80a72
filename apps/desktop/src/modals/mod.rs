//! Confirmation dialogs populated from the clicked row. Pure data relay:
//! the display fields mirror the row and the hidden input carries the
//! record id for the server-side form submission.

use dioxus::prelude::*;

use labdash_core::modal::{ModalKind, ModalState};

use crate::state::ModalStates;

/// Hosts the three dialogs; each renders only while open.
#[component]
pub fn ModalHost() -> Element {
    rsx! {
        for kind in ModalKind::ALL {
            Modal { kind }
        }
    }
}

#[component]
fn Modal(kind: ModalKind) -> Element {
    let modals = use_context::<ModalStates>();
    let mut state = modals.signal_for(kind);

    let context = match &*state.read() {
        ModalState::Open(context) => context.clone(),
        ModalState::Closed => return rsx! {},
    };

    rsx! {
        div {
            id: kind.element_id(),
            class: "modal-backdrop",
            div {
                class: "modal-dialog",

                header {
                    class: "modal-header",
                    h2 { class: "modal-title", {kind.title()} }
                    button {
                        class: "modal-close",
                        onclick: move |_| state.write().dismiss(),
                        "\u{00D7}"
                    }
                }

                dl {
                    class: "modal-fields",
                    for field in context.fields.iter() {
                        dt { class: "modal-field-label", {field.label} }
                        dd { class: field.class, {field.value.clone()} }
                    }
                }

                // submission itself is handled server-side; the hidden input
                // just carries the record id along
                form {
                    class: "modal-form",
                    method: "post",
                    input {
                        r#type: "hidden",
                        id: kind.hidden_input_id(),
                        name: kind.hidden_input_name(),
                        value: context.record_id.clone(),
                    }
                    div {
                        class: "modal-actions",
                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            onclick: move |_| state.write().dismiss(),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            {kind.confirm_label()}
                        }
                    }
                }
            }
        }
    }
}
