use std::collections::BTreeMap;

use crate::auth::{use_api, use_auth};
use crate::components::SheetMode;
use dioxus::prelude::*;
use shared_types::{FormMode, Role, UserForm, UserRecord};
use shared_ui::components::{
    Alert, Button, ButtonVariant, FormSelect, Input, Sheet, SheetContent, SheetFooter,
    SheetHeader,
};

const CREATE_FALLBACK: &str = "Failed to create user. Please try again.";
const UPDATE_FALLBACK: &str = "Failed to update user. Please try again.";

#[component]
pub fn UserFormSheet(
    mode: SheetMode<UserRecord>,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let initial = match &mode {
        SheetMode::Create => UserForm::default(),
        SheetMode::Edit(user) => UserForm::from_record(user),
    };
    let mut form = use_signal(move || initial);
    let mut errors = use_signal(BTreeMap::<String, String>::new);
    let mut submit_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let form_mode = mode.form_mode();

    let (title, description) = match form_mode {
        FormMode::Create => ("Create New User", "Fill in the details to add a new team member"),
        FormMode::Edit => ("Edit User", "Update user information"),
    };

    let target = mode.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        let current = form.read().clone();
        if let Err(e) = current.check(form_mode) {
            errors.set(e.field_errors);
            return;
        }
        errors.set(BTreeMap::new());
        submit_error.set(None);
        saving.set(true);

        let target = target.clone();
        let api = api.clone();
        spawn(async move {
            let result = match &target {
                SheetMode::Create => {
                    client::api::users::create_user(&api, &current.create_request())
                        .await
                        .map_err(|e| auth.request_error(&e, CREATE_FALLBACK))
                }
                SheetMode::Edit(user) => {
                    client::api::users::update_user(&api, user.id(), &current.update_request())
                        .await
                        .map_err(|e| auth.request_error(&e, UPDATE_FALLBACK))
                }
            };
            saving.set(false);
            match result {
                Ok(()) => on_saved.call(()),
                Err(message) => submit_error.set(Some(message)),
            }
        });
    };

    let field_error = move |key: &str| errors.read().get(key).cloned();
    let values = form.read().clone();
    let submit_label = match (saving(), form_mode) {
        (true, FormMode::Create) => "Creating user...",
        (true, FormMode::Edit) => "Updating user...",
        (false, FormMode::Create) => "Create User",
        (false, FormMode::Edit) => "Save Changes",
    };

    rsx! {
        Sheet { open: true, on_close: move |_| on_close.call(()),
            SheetHeader { title, description, on_close: move |_| on_close.call(()) }
            form { class: "sheet-form", onsubmit: handle_submit, novalidate: true,
                SheetContent {
                    if let Some(err) = submit_error() {
                        Alert { message: err }
                    }
                    Input {
                        label: "Full Name",
                        placeholder: "Enter full name",
                        value: values.name.clone(),
                        error: field_error("name"),
                        on_input: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                    Input {
                        label: "Email Address",
                        input_type: "email",
                        placeholder: "Enter email address",
                        value: values.email.clone(),
                        error: field_error("email"),
                        on_input: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                    if form_mode == FormMode::Create {
                        Input {
                            label: "Password",
                            input_type: "password",
                            placeholder: "Enter password",
                            value: values.password.clone(),
                            error: field_error("password"),
                            on_input: move |evt: FormEvent| form.write().password = evt.value(),
                        }
                    }
                    FormSelect {
                        label: "Role",
                        value: values.role.clone(),
                        error: field_error("role"),
                        onchange: move |evt: FormEvent| form.write().role = evt.value(),
                        option { value: "", "Select Role" }
                        for role in Role::ALL {
                            option { value: role.as_str(), "{role.label()}" }
                        }
                    }
                }
                SheetFooter {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        button_type: "submit",
                        busy: saving(),
                        disabled: saving(),
                        "{submit_label}"
                    }
                }
            }
        }
    }
}
