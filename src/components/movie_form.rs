//! Movie Form Component
//!
//! Create/edit form for one record. Validation happens on submit, before
//! any network call; the draft survives every failure so the user can retry.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::form::{FormField, MovieDraft};

/// Form for adding a new movie or updating the one being edited
#[component]
pub fn MovieForm(
    form: RwSignal<MovieDraft>,
    editing_id: ReadSignal<Option<u32>>,
    set_editing_id: WriteSignal<Option<u32>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let edit_field = move |field: FormField| {
        move |ev: web_sys::Event| {
            form.update(|draft| draft.set_field(field, event_target_value(&ev)));
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let payload = match form.get().validate(Local::now().date_naive()) {
            Ok(payload) => payload,
            Err(err) => {
                ctx.notify(err.to_string());
                return;
            }
        };

        let editing = editing_id.get();
        spawn_local(async move {
            let saved = match editing {
                Some(id) => api::update_movie(id, &payload).await,
                None => api::create_movie(&payload).await,
            };
            match saved {
                Ok(()) => {
                    form.update(|draft| draft.clear());
                    set_editing_id.set(None);
                    ctx.reload();
                }
                Err(err) => {
                    log::error!("failed to save movie: {err}");
                    ctx.notify("Failed to save movie");
                }
            }
        });
    };

    view! {
        <form class="movie-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Movie Name"
                prop:value=move || form.get().movie_name
                on:input=edit_field(FormField::MovieName)
            />
            <input
                type="date"
                prop:value=move || form.get().watch_date
                on:input=edit_field(FormField::WatchDate)
            />
            <input
                type="number"
                placeholder="Rating (0-10)"
                min="0"
                max="10"
                prop:value=move || form.get().rating
                on:input=edit_field(FormField::Rating)
            />
            <input
                type="text"
                class="review-input"
                placeholder="Review"
                prop:value=move || form.get().review
                on:input=edit_field(FormField::Review)
            />
            <button type="submit">
                {move || if editing_id.get().is_some() { "Update Movie" } else { "Add Movie" }}
            </button>
        </form>
    }
}
