use leptos::prelude::*;

use crate::core::modal::{Modal, ModalAction, ModalEvent, ModalView};

/// Open `modal` with the standard "Confirm" dialog
pub fn open_confirm(modal: RwSignal<Modal>, message: impl Into<String>) {
    let view = ModalView::confirm(message);
    modal.update(|m| m.open(view));
}

/// Overlay rendering whatever [`ModalView`] `modal` holds.
///
/// The × button, a click on the backdrop and Escape close it. Footer buttons
/// close it and report their action through `on_action`.
#[component]
pub fn BaseModal(
    /// Dialog state
    modal: RwSignal<Modal>,
    /// Called with the clicked footer button's action, after the modal closed
    #[prop(optional, into)]
    on_action: Option<Callback<ModalAction>>,
) -> impl IntoView {
    let dispatch = move |event: ModalEvent| {
        let action = modal.try_update(|m| m.handle(event)).flatten();
        if let (Some(action), Some(callback)) = (action, on_action) {
            callback.run(action);
        }
    };

    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::keydown;

        let handle = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && modal.with_untracked(Modal::is_open) {
                dispatch(ModalEvent::CloseButton);
            }
        });
        on_cleanup(move || handle.remove());
    }

    move || {
        modal.with(|m| m.view().cloned()).map(|content| {
            let has_footer = !content.footer.is_empty();
            let buttons = content
                .footer
                .into_iter()
                .map(|button| {
                    let action = button.action.clone();
                    view! {
                        <button
                            class=button.style.class()
                            on:click=move |_| dispatch(ModalEvent::Button(action.clone()))
                        >
                            {button.label}
                        </button>
                    }
                })
                .collect::<Vec<_>>();

            view! {
                <div class="modal show" on:click=move |_| dispatch(ModalEvent::Backdrop)>
                    <div
                        class="modal-content"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            dispatch(ModalEvent::Panel);
                        }
                    >
                        <div class="modal-header">
                            <h3>{content.title}</h3>
                            <button
                                class="modal-close"
                                aria-label="Close"
                                on:click=move |_| dispatch(ModalEvent::CloseButton)
                            >
                                "×"
                            </button>
                        </div>
                        <div class="modal-body">
                            <p>{content.body}</p>
                        </div>
                        {has_footer.then(|| view! { <div class="modal-footer">{buttons}</div> })}
                    </div>
                </div>
            }
        })
    }
}

/// "Confirm" dialog. Open it with [`open_confirm`].
#[component]
pub fn ConfirmModal(
    modal: RwSignal<Modal>,
    /// Called after the modal closed on Confirm
    on_confirm: Callback<()>,
    /// Called after the modal closed on Cancel
    #[prop(optional, into)]
    on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let on_action = Callback::new(move |action: ModalAction| match action {
        ModalAction::Confirm => on_confirm.run(()),
        ModalAction::Cancel => {
            if let Some(callback) = on_cancel {
                callback.run(());
            }
        }
        ModalAction::Custom(_) => {}
    });

    view! { <BaseModal modal=modal on_action=on_action/> }
}
