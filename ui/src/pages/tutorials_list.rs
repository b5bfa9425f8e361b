use payloads::{
    ClientError, RequestDescription, Tutorial, requests::TutorialFilter,
    responses::SuccessMessage,
};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{ErrorBanner, TutorialDetail};
use crate::hooks::use_fetch;
use crate::{State, get_api_client};

/// Local state of the tutorials list page.
///
/// The selection keeps the record and its position together so that the
/// highlighted row and the detail pane can never disagree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TutorialsListState {
    pub search_title: String,
    pub tutorials: Vec<Tutorial>,
    pub selected: Option<(usize, Tutorial)>,
}

impl TutorialsListState {
    /// Request for the tutorials matching the current search text.
    pub fn search_request(&self) -> RequestDescription {
        TutorialFilter::by_title(&self.search_title).request()
    }

    /// What a refresh does: fetch every tutorial regardless of search text,
    /// and drop the selection.
    pub fn refresh() -> (RequestDescription, TutorialsListAction) {
        (TutorialFilter::default().request(), TutorialsListAction::Refresh)
    }

    pub fn selected_tutorial(&self) -> Option<&Tutorial> {
        self.selected.as_ref().map(|(_, tutorial)| tutorial)
    }

    /// Index of the highlighted row, or -1 when nothing is selected.
    pub fn selected_index(&self) -> isize {
        self.selected
            .as_ref()
            .map_or(-1, |(index, _)| *index as isize)
    }
}

pub enum TutorialsListAction {
    SetSearchTitle(String),
    /// Copy the latest fetch result into the rendered list.
    SetTutorials(Option<Vec<Tutorial>>),
    Select { tutorial: Tutorial, index: usize },
    Refresh,
}

impl Reducible for TutorialsListState {
    type Action = TutorialsListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            TutorialsListAction::SetSearchTitle(title) => {
                next.search_title = title;
            }
            TutorialsListAction::SetTutorials(tutorials) => {
                next.tutorials = tutorials.unwrap_or_default();
            }
            TutorialsListAction::Select { tutorial, index } => {
                next.selected = Some((index, tutorial));
            }
            TutorialsListAction::Refresh => {
                next.selected = None;
            }
        }

        Rc::new(next)
    }
}

/// What the page does once a delete-all request settles.
#[derive(Debug, PartialEq)]
pub enum DeleteAllOutcome {
    Refresh,
    Report(String),
}

impl DeleteAllOutcome {
    pub fn from_result(result: Result<SuccessMessage, ClientError>) -> Self {
        match result {
            Ok(response) => {
                tracing::info!(response = %response.message, "removed all tutorials");
                Self::Refresh
            }
            Err(e) => {
                tracing::error!("failed to remove all tutorials: {e}");
                Self::Report(format!("Could not remove tutorials: {e}"))
            }
        }
    }
}

#[function_component]
pub fn TutorialsListPage() -> Html {
    let state = use_reducer(TutorialsListState::default);
    let (_, dispatch) = use_store::<State>();
    let fetch = use_fetch::<Vec<Tutorial>>(state.search_request());

    // Copy fetch results into the rendered list
    {
        let state = state.dispatcher();
        use_effect_with(fetch.data.clone(), move |data| {
            state.dispatch(TutorialsListAction::SetTutorials(data.clone()));
        });
    }

    {
        use_effect_with(fetch.is_loading, move |is_loading| {
            if *is_loading {
                tracing::debug!("retrieving tutorials...");
            }
        });
    }

    let on_search_title_change = {
        let state = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(TutorialsListAction::SetSearchTitle(input.value()));
        })
    };

    let find_by_title = {
        let trigger = fetch.trigger.clone();
        Callback::from(move |_: MouseEvent| trigger.emit(None))
    };

    let on_search_keypress = {
        let trigger = fetch.trigger.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                trigger.emit(None);
            }
        })
    };

    let refresh_list = {
        let trigger = fetch.trigger.clone();
        let state = state.dispatcher();
        let dispatch = dispatch.clone();
        Callback::from(move |_: ()| {
            let (request, action) = TutorialsListState::refresh();
            trigger.emit(Some(request));
            state.dispatch(action);
            dispatch.reduce_mut(|s| s.clear_error());
        })
    };

    let remove_all_tutorials = {
        let refresh_list = refresh_list.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            let refresh_list = refresh_list.clone();
            let dispatch = dispatch.clone();
            yew::platform::spawn_local(async move {
                let result = get_api_client().delete_all_tutorials().await;
                match DeleteAllOutcome::from_result(result) {
                    DeleteAllOutcome::Refresh => refresh_list.emit(()),
                    DeleteAllOutcome::Report(message) => {
                        dispatch.reduce_mut(|s| s.set_error(message));
                    }
                }
            });
        })
    };

    let selected_index = state.selected_index();

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            <div class="md:col-span-2">
                <div class="flex gap-2">
                    <input
                        type="text"
                        class="flex-1 px-3 py-2 border border-neutral-300 dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-800"
                        placeholder="Search by title"
                        value={state.search_title.clone()}
                        oninput={on_search_title_change}
                        onkeypress={on_search_keypress}
                    />
                    <button
                        type="button"
                        class="px-4 py-2 border border-neutral-300 dark:border-neutral-600 rounded-md hover:bg-neutral-100 dark:hover:bg-neutral-700"
                        onclick={find_by_title}
                    >
                        {"Search"}
                    </button>
                </div>
            </div>

            <div>
                <h4 class="text-lg font-semibold mb-3">{"Tutorials List"}</h4>

                if fetch.is_loading {
                    <p class="text-neutral-600 dark:text-neutral-400 mb-2">{"loading..."}</p>
                }

                if let Some(error) = &fetch.error {
                    <ErrorBanner message={format!("Error loading tutorials: {error}")} />
                }

                <ul class="divide-y divide-neutral-200 dark:divide-neutral-700 border border-neutral-200 dark:border-neutral-700 rounded-md">
                    {
                        state.tutorials.iter().enumerate().map(|(index, tutorial)| {
                            let onclick = {
                                let state = state.dispatcher();
                                let tutorial = tutorial.clone();
                                Callback::from(move |_: MouseEvent| {
                                    state.dispatch(TutorialsListAction::Select {
                                        tutorial: tutorial.clone(),
                                        index,
                                    });
                                })
                            };
                            let row_class = if index as isize == selected_index {
                                "px-4 py-2 cursor-pointer bg-blue-600 text-white"
                            } else {
                                "px-4 py-2 cursor-pointer hover:bg-neutral-100 dark:hover:bg-neutral-800"
                            };
                            html! {
                                <li key={index} class={row_class} {onclick}>
                                    {&tutorial.title}
                                </li>
                            }
                        }).collect::<Html>()
                    }
                </ul>

                <button
                    class="mt-3 px-3 py-1 text-sm rounded-md bg-red-600 hover:bg-red-700 text-white"
                    onclick={remove_all_tutorials}
                >
                    {"Remove All"}
                </button>
            </div>

            <div>
                {match state.selected_tutorial() {
                    Some(tutorial) => html! {
                        <TutorialDetail tutorial={tutorial.clone()} />
                    },
                    None => html! {
                        <div>
                            <br />
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {"Please click on a Tutorial..."}
                            </p>
                        </div>
                    },
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::use_fetch::{FetchAction, FetchStatus, RequestIssuer};
    use payloads::TutorialId;
    use reqwest::StatusCode;

    fn tutorial(id: i64, title: &str, published: bool) -> Tutorial {
        Tutorial {
            id: TutorialId(id),
            title: title.to_string(),
            description: "...".to_string(),
            published,
            created_at: None,
            updated_at: None,
        }
    }

    fn apply(
        state: Rc<TutorialsListState>,
        action: TutorialsListAction,
    ) -> Rc<TutorialsListState> {
        state.reduce(action)
    }

    /// Run a refresh the way the page does: issue the refresh request
    /// through the hook's issuer, apply the refresh action, then settle the
    /// fetch with `response` and copy it into the list.
    fn run_refresh(
        state: Rc<TutorialsListState>,
        issuer: &mut RequestIssuer,
        response: Vec<Tutorial>,
    ) -> (Rc<TutorialsListState>, RequestDescription) {
        let (request, action) = TutorialsListState::refresh();
        let (generation, sent) = issuer.issue(Some(request));
        let state = apply(state, action);

        let fetched = Rc::new(FetchStatus::<Vec<Tutorial>>::default())
            .reduce(FetchAction::Started(generation))
            .reduce(FetchAction::Succeeded(generation, response));
        let state = apply(
            state,
            TutorialsListAction::SetTutorials(fetched.data.clone()),
        );
        (state, sent)
    }

    fn with_list(tutorials: Vec<Tutorial>) -> Rc<TutorialsListState> {
        apply(
            Rc::new(TutorialsListState::default()),
            TutorialsListAction::SetTutorials(Some(tutorials)),
        )
    }

    #[test]
    fn typing_only_changes_search_text() {
        let state = with_list(vec![tutorial(1, "React Basics", true)]);
        let state = apply(
            state,
            TutorialsListAction::SetSearchTitle("Rea".to_string()),
        );
        assert_eq!(state.search_title, "Rea");
        assert_eq!(state.tutorials.len(), 1);
        assert_eq!(state.selected_index(), -1);
    }

    #[test]
    fn search_then_select_shows_detail() {
        let state = apply(
            Rc::new(TutorialsListState::default()),
            TutorialsListAction::SetSearchTitle("React".to_string()),
        );
        let request = state.search_request();
        assert_eq!(request.path, "tutorials");
        assert_eq!(
            request.params,
            vec![("title".to_string(), "React".to_string())]
        );

        // hook settles with the mocked response
        let response = vec![tutorial(1, "React Basics", true)];
        let fetched = Rc::new(FetchStatus::<Vec<Tutorial>>::default())
            .reduce(FetchAction::Started(1))
            .reduce(FetchAction::Succeeded(1, response.clone()));

        let state = apply(
            state,
            TutorialsListAction::SetTutorials(fetched.data.clone()),
        );
        let titles: Vec<_> =
            state.tutorials.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["React Basics"]);

        let state = apply(
            state,
            TutorialsListAction::Select {
                tutorial: response[0].clone(),
                index: 0,
            },
        );
        assert_eq!(state.selected_index(), 0);
        let selected = state.selected_tutorial().unwrap();
        assert_eq!(selected.title, "React Basics");
        assert_eq!(selected.status_label(), "Published");
    }

    #[test]
    fn selecting_another_record_replaces_both() {
        let a = tutorial(1, "React Basics", true);
        let b = tutorial(2, "Rust Ownership", false);
        let state = with_list(vec![a.clone(), b.clone()]);

        let state = apply(
            state,
            TutorialsListAction::Select {
                tutorial: a,
                index: 0,
            },
        );
        let state = apply(
            state,
            TutorialsListAction::Select {
                tutorial: b.clone(),
                index: 1,
            },
        );
        assert_eq!(state.selected, Some((1, b)));
    }

    #[test]
    fn refresh_clears_selection_and_ignores_search_text() {
        let a = tutorial(1, "React Basics", true);
        let b = tutorial(2, "Rust Ownership", false);
        let state = with_list(vec![a.clone()]);
        let state = apply(
            state,
            TutorialsListAction::SetSearchTitle("React".to_string()),
        );
        let state = apply(
            state,
            TutorialsListAction::Select {
                tutorial: a.clone(),
                index: 0,
            },
        );
        let mut issuer = RequestIssuer::new(state.search_request());

        let (state, sent) =
            run_refresh(state, &mut issuer, vec![a.clone(), b.clone()]);
        assert_eq!(sent.path, "tutorials");
        assert!(sent.params.is_empty());
        assert_eq!(state.selected_tutorial(), None);
        assert_eq!(state.selected_index(), -1);
        assert_eq!(state.tutorials, vec![a, b]);
        // the search box keeps its text
        assert_eq!(state.search_title, "React");

        // the next plain search still uses the search text
        let (_, next) = issuer.issue(None);
        assert_eq!(
            next.params,
            vec![("title".to_string(), "React".to_string())]
        );
    }

    #[test]
    fn delete_all_success_leaves_empty_list_and_no_selection() {
        let a = tutorial(1, "React Basics", true);
        let state = with_list(vec![a.clone()]);
        let state = apply(
            state,
            TutorialsListAction::Select {
                tutorial: a,
                index: 0,
            },
        );
        let mut issuer = RequestIssuer::new(state.search_request());

        let outcome = DeleteAllOutcome::from_result(Ok(SuccessMessage {
            message: "1 Tutorials were deleted successfully!".into(),
        }));
        assert_eq!(outcome, DeleteAllOutcome::Refresh);

        let (state, sent) = run_refresh(state, &mut issuer, vec![]);
        assert!(sent.params.is_empty());
        assert!(state.tutorials.is_empty());
        assert_eq!(state.selected_tutorial(), None);
        assert_eq!(state.selected_index(), -1);
    }

    #[test]
    fn delete_all_failure_leaves_state_untouched() {
        let a = tutorial(1, "React Basics", true);
        let state = with_list(vec![a.clone()]);
        let state = apply(
            state,
            TutorialsListAction::Select {
                tutorial: a,
                index: 0,
            },
        );
        let before = (*state).clone();

        let outcome = DeleteAllOutcome::from_result(Err(
            ClientError::APIError(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong".into(),
            ),
        ));
        assert_eq!(
            outcome,
            DeleteAllOutcome::Report(
                "Could not remove tutorials: Something went wrong".into()
            )
        );
        assert_eq!(*state, before);
    }

    #[test]
    fn missing_fetch_data_shows_empty_list() {
        let state = with_list(vec![tutorial(1, "React Basics", true)]);
        let state = apply(state, TutorialsListAction::SetTutorials(None));
        assert!(state.tutorials.is_empty());
    }
}
