//! Property details form

use std::str::FromStr;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use rust_decimal::Decimal;

use estate_core::format_quantity;
use estate_core::model::{
    bathroom_choices, bedroom_choices, Location, PropertyAttributes, YesNo, LOT_SIZE_MAX,
    LOT_SIZE_MIN, LOT_SIZE_STEP, SQUARE_FOOTAGE_MAX, SQUARE_FOOTAGE_MIN, SQUARE_FOOTAGE_STEP,
    YEAR_BUILT_MIN,
};

#[component]
pub fn PropertyForm(
    on_submit: Callback<PropertyAttributes>,
    #[prop(into)] loading: Signal<bool>,
    current_year: i32,
) -> impl IntoView {
    let form = RwSignal::new(PropertyAttributes::default());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.run(form.get());
    };

    view! {
        <div id="property-form" class="card">
            <div class="card-header">
                <h2>"Property Details"</h2>
            </div>

            <form class="card-body" on:submit=submit>
                <div class="field">
                    <div class="field-label">
                        <label for="squareFootage">"Square Footage"</label>
                        <span>{move || format!("{} sq ft", form.with(|f| f.square_footage))}</span>
                    </div>
                    <input
                        id="squareFootage"
                        type="range"
                        min=SQUARE_FOOTAGE_MIN.to_string()
                        max=SQUARE_FOOTAGE_MAX.to_string()
                        step=SQUARE_FOOTAGE_STEP.to_string()
                        prop:value=move || form.with(|f| f.square_footage.to_string())
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                form.update(|f| f.square_footage = value);
                            }
                        }
                    />
                </div>

                <div class="field-row">
                    <div class="field">
                        <label for="bedrooms">"Bedrooms"</label>
                        <select
                            id="bedrooms"
                            on:change=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse::<u8>() {
                                    form.update(|f| f.bedrooms = value);
                                }
                            }
                        >
                            {bedroom_choices()
                                .map(|n| {
                                    view! {
                                        <option
                                            value=n.to_string()
                                            prop:selected=move || form.with(|f| f.bedrooms == n)
                                        >
                                            {n.to_string()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>

                    <div class="field">
                        <label for="bathrooms">"Bathrooms"</label>
                        <select
                            id="bathrooms"
                            on:change=move |ev| {
                                if let Ok(value) = Decimal::from_str(&event_target_value(&ev)) {
                                    form.update(|f| f.bathrooms = value);
                                }
                            }
                        >
                            {bathroom_choices()
                                .into_iter()
                                .map(|n| {
                                    view! {
                                        <option
                                            value=format_quantity(n)
                                            prop:selected=move || form.with(|f| f.bathrooms == n)
                                        >
                                            {format_quantity(n)}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                </div>

                <div class="field">
                    <div class="field-label">
                        <label for="yearBuilt">"Year Built"</label>
                        <span>{move || form.with(|f| f.year_built.to_string())}</span>
                    </div>
                    <input
                        id="yearBuilt"
                        type="range"
                        min=YEAR_BUILT_MIN.to_string()
                        max=current_year.to_string()
                        step="1"
                        prop:value=move || form.with(|f| f.year_built.to_string())
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<i32>() {
                                form.update(|f| f.year_built = value);
                            }
                        }
                    />
                </div>

                <div class="field">
                    <label for="location">"Location Type"</label>
                    <select
                        id="location"
                        on:change=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<Location>() {
                                form.update(|f| f.location = value);
                            }
                        }
                    >
                        {Location::ALL
                            .into_iter()
                            .map(|location| {
                                view! {
                                    <option
                                        value=location.as_str()
                                        prop:selected=move || form.with(|f| f.location == location)
                                    >
                                        {location.as_str()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </div>

                <div class="field">
                    <div class="field-label">
                        <label for="lotSize">"Lot Size (acres)"</label>
                        <span>{move || format!("{} acres", form.with(|f| format_quantity(f.lot_size)))}</span>
                    </div>
                    <input
                        id="lotSize"
                        type="range"
                        min=LOT_SIZE_MIN.to_string()
                        max=LOT_SIZE_MAX.to_string()
                        step=LOT_SIZE_STEP.to_string()
                        prop:value=move || form.with(|f| f.lot_size.to_string())
                        on:input=move |ev| {
                            if let Ok(value) = Decimal::from_str(&event_target_value(&ev)) {
                                form.update(|f| f.lot_size = value);
                            }
                        }
                    />
                </div>

                <div class="field-row">
                    <YesNoField
                        id="hasGarage"
                        label="Garage"
                        value=Signal::derive(move || form.with(|f| f.has_garage))
                        on_change=Callback::new(move |value| form.update(|f| f.has_garage = value))
                    />
                    <YesNoField
                        id="hasPool"
                        label="Pool"
                        value=Signal::derive(move || form.with(|f| f.has_pool))
                        on_change=Callback::new(move |value| form.update(|f| f.has_pool = value))
                    />
                </div>

                <button
                    type="submit"
                    class="btn btn-primary btn-block"
                    disabled=move || loading.get()
                >
                    {move || if loading.get() { "Calculating..." } else { "Get Price Prediction" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn YesNoField(
    id: &'static str,
    label: &'static str,
    value: Signal<YesNo>,
    on_change: Callback<YesNo>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label for=id>{label}</label>
            <select
                id=id
                on:change=move |ev| {
                    if let Ok(choice) = event_target_value(&ev).parse::<YesNo>() {
                        on_change.run(choice);
                    }
                }
            >
                {YesNo::ALL
                    .into_iter()
                    .map(|choice| {
                        view! {
                            <option
                                value=choice.as_str()
                                prop:selected=move || value.get() == choice
                            >
                                {choice.as_str()}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}
