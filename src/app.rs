//! Movie Log App
//!
//! Root component owning the list, the form draft, and the editing marker.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{MovieForm, MovieTable, StatusBanner};
use crate::context::AppContext;
use crate::form::MovieDraft;
use crate::models::Movie;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (movies, set_movies) = signal(Vec::<Movie>::new());
    let form = RwSignal::new(MovieDraft::default());
    let (editing_id, set_editing_id) = signal::<Option<u32>>(None);
    let (loading, set_loading) = signal(false);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (notice, set_notice) = signal::<Option<String>>(None);

    // Provide context to all children
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), (notice, set_notice));
    provide_context(ctx);

    // Load the list on mount and after every successful mutation. A failed
    // fetch keeps the previous list.
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_movies().await {
                Ok(loaded) => {
                    log::debug!("loaded {} movies", loaded.len());
                    set_movies.set(loaded);
                }
                Err(err) => {
                    log::error!("failed to fetch movies: {err}");
                    ctx.notify("Failed to fetch movies");
                }
            }
            set_loading.set(false);
        });
    });

    let begin_edit = move |movie: Movie| {
        form.set(MovieDraft::from_movie(&movie));
        set_editing_id.set(Some(movie.movie_id));
    };

    view! {
        <div class="container">
            <h1>"Movie Log"</h1>

            <StatusBanner />

            <MovieForm form=form editing_id=editing_id set_editing_id=set_editing_id />

            <MovieTable movies=movies loading=loading on_edit=begin_edit />

            <p class="movie-count">{move || format!("{} movies logged", movies.get().len())}</p>
        </div>
    }
}
