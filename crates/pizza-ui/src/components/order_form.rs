//! # Order Form Component
//!
//! Name input, size select, topping checkboxes and submit control. The
//! component owns one [`OrderFormState`] signal; every DOM event becomes an
//! [`OrderEvent`] run through [`transition`], and the signal is only written
//! when the transition asks for a render.

use dioxus::prelude::*;
use pizza_app::{
    size_options, transition, Field, FieldUpdate, FormConfig, OrderCommand, OrderEvent,
    OrderFormState, TOPPINGS,
};
use tracing::debug;

use super::{Banner, FieldError};

/// Run one event through the form state and store the result if it changed.
fn dispatch(mut form: Signal<OrderFormState>, event: OrderEvent) {
    let (next, commands) = transition(&form.peek(), event);

    let mut render = false;
    for command in commands {
        match command {
            OrderCommand::Render => render = true,
            OrderCommand::OrderPlaced(order) => {
                debug!(toppings = order.toppings.len(), "Order handed off");
            }
        }
    }

    if render {
        form.set(next);
    }
}

/// Pizza order form
#[component]
pub fn OrderForm(#[props(default)] config: FormConfig) -> Element {
    let form = use_signal(move || OrderFormState::new(config));
    let state = form.read().clone();

    let full_name = state.draft().full_name().to_string();
    let size = state.draft().size().to_string();
    let name_error = state.field_error(Field::FullName).map(str::to_string);
    let size_error = state.field_error(Field::Size).map(str::to_string);
    let can_submit = state.can_submit();
    let name_key = Field::FullName.key();
    let name_label = Field::FullName.label();
    let size_key = Field::Size.key();
    let size_label = Field::Size.label();

    rsx! {
        form {
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                dispatch(form, OrderEvent::Submit);
            },
            h2 { "Order Your Pizza" }
            if let Some(banner) = state.banner().cloned() {
                Banner { banner }
            }

            div { class: "input-group",
                div {
                    label { r#for: name_key, "{name_label}" }
                    br {}
                    input {
                        id: name_key,
                        r#type: "text",
                        placeholder: "Type full name",
                        value: "{full_name}",
                        oninput: move |evt: FormEvent| {
                            dispatch(form, OrderEvent::Edit(FieldUpdate::FullName(evt.value())));
                        },
                    }
                }
                if let Some(message) = name_error {
                    FieldError { message }
                }
            }

            div { class: "input-group",
                div {
                    label { r#for: size_key, "{size_label}" }
                    br {}
                    select {
                        id: size_key,
                        value: "{size}",
                        onchange: move |evt: FormEvent| {
                            dispatch(form, OrderEvent::Edit(FieldUpdate::Size(evt.value())));
                        },
                        for opt in size_options() {
                            option {
                                key: "{opt.value}",
                                value: opt.value,
                                selected: opt.value == size,
                                "{opt.label}"
                            }
                        }
                    }
                }
                if let Some(message) = size_error {
                    FieldError { message }
                }
            }

            div { class: "input-group",
                for topping in TOPPINGS.iter() {
                    label { key: "{topping.id}",
                        input {
                            name: topping.label,
                            r#type: "checkbox",
                            checked: state.draft().is_selected(topping.id),
                            onchange: move |_| {
                                let selected = !form.peek().draft().is_selected(topping.id);
                                dispatch(
                                    form,
                                    OrderEvent::Edit(FieldUpdate::Topping { topping, selected }),
                                );
                            },
                        }
                        "{topping.label}"
                        br {}
                    }
                }
            }

            input { r#type: "submit", disabled: !can_submit }
        }
    }
}
