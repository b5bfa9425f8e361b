use payloads::{RequestDescription, Tutorial, TutorialId};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{ErrorBanner, tutorial_detail::detail_fields};
use crate::hooks::use_fetch;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: TutorialId,
}

/// Page for a single tutorial; the target of the list's Edit link.
#[function_component]
pub fn TutorialPage(props: &Props) -> Html {
    let fetch = use_fetch::<Tutorial>(RequestDescription::get(format!(
        "tutorials/{}",
        props.id
    )));

    let content = fetch.render("tutorial", |tutorial, is_loading, error| {
        let timestamp = |ts: Option<jiff::Timestamp>| {
            ts.map(|ts| ts.strftime("%b %d, %Y %H:%M UTC").to_string())
                .unwrap_or_else(|| "-".to_string())
        };
        html! {
            <div>
                if is_loading {
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">{"Refreshing..."}</p>
                }
                if let Some(error) = error {
                    <ErrorBanner message={error.clone()} />
                }
                <h4 class="text-lg font-semibold mb-3">{"Tutorial"}</h4>
                {
                    detail_fields(tutorial).into_iter().map(|(label, value)| html! {
                        <div class="mb-1">
                            <label><strong>{label}</strong></label>
                            {" "}
                            {value}
                        </div>
                    }).collect::<Html>()
                }
                <div class="mt-3 text-sm text-neutral-600 dark:text-neutral-400">
                    <div>{format!("Created: {}", timestamp(tutorial.created_at))}</div>
                    <div>{format!("Updated: {}", timestamp(tutorial.updated_at))}</div>
                </div>
            </div>
        }
    });

    let on_retry = {
        let refetch = fetch.refetch.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };

    html! {
        <div class="space-y-4">
            <Link<Route> to={Route::Tutorials} classes="text-blue-600 hover:underline">
                {"← Back to tutorials"}
            </Link<Route>>
            {content}
            if fetch.error.is_some() && !fetch.is_loading {
                <button
                    class="px-3 py-1 text-sm border border-neutral-300 dark:border-neutral-600 rounded-md"
                    onclick={on_retry}
                >
                    {"Retry"}
                </button>
            }
        </div>
    }
}
