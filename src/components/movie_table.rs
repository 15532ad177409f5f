//! Movie Table Component
//!
//! Table of logged movies with per-row edit and delete controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::Movie;

#[component]
pub fn MovieTable(
    movies: ReadSignal<Vec<Movie>>,
    loading: ReadSignal<bool>,
    #[prop(into)] on_edit: Callback<Movie>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let delete_movie = move |id: u32| {
        spawn_local(async move {
            match api::delete_movie(id).await {
                Ok(()) => ctx.reload(),
                Err(err) => {
                    log::error!("failed to delete movie {id}: {err}");
                    ctx.notify("Failed to delete movie");
                }
            }
        });
    };

    view! {
        <Show when=move || loading.get()>
            <div class="loading">"Loading..."</div>
        </Show>

        <table class="movie-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Date"</th>
                    <th>"Rating"</th>
                    <th>"Review"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || movies.get()
                    key=|movie| movie.movie_id
                    children=move |movie| {
                        let id = movie.movie_id;
                        let row_movie = movie.clone();
                        let review = movie.review.clone().unwrap_or_default();
                        view! {
                            <tr>
                                <td>{movie.movie_name.clone()}</td>
                                <td>{movie.watch_date.to_string()}</td>
                                <td>{movie.rating}</td>
                                <td>{review}</td>
                                <td class="actions">
                                    <button
                                        class="edit-btn"
                                        on:click=move |_| on_edit.run(row_movie.clone())
                                    >
                                        "Edit"
                                    </button>
                                    <DeleteConfirmButton on_confirm=move |_| delete_movie(id) />
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
