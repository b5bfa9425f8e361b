use payloads::RequestDescription;
use serde::de::DeserializeOwned;
use std::rc::Rc;
use yew::prelude::*;

use crate::get_api_client;

/// Request bookkeeping for [`use_fetch`].
///
/// Every issued request is tagged with a generation number. Only the most
/// recently issued request may settle the status, so an older response that
/// resolves late can never overwrite a newer one.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchStatus<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub is_loading: bool,
    generation: u64,
}

impl<T> Default for FetchStatus<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            is_loading: false,
            generation: 0,
        }
    }
}

impl<T> FetchStatus<T> {
    /// Generation of the request currently being tracked; 0 before the
    /// first request is issued.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

pub enum FetchAction<T> {
    Started(u64),
    Succeeded(u64, T),
    Failed(u64, String),
}

impl<T: Clone> Reducible for FetchStatus<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            FetchAction::Started(generation) => {
                if generation < self.generation {
                    return self;
                }
                next.generation = generation;
                next.is_loading = true;
                next.error = None;
            }
            FetchAction::Succeeded(generation, data) => {
                if generation != self.generation {
                    return self;
                }
                next.data = Some(data);
                next.error = None;
                next.is_loading = false;
            }
            FetchAction::Failed(generation, error) => {
                if generation != self.generation {
                    return self;
                }
                // previously fetched data is kept alongside the error
                next.error = Some(error);
                next.is_loading = false;
            }
        }

        Rc::new(next)
    }
}

/// Hands out generation numbers and remembers the description the hook was
/// last rendered with.
#[derive(Debug)]
pub struct RequestIssuer {
    issued: u64,
    latest: RequestDescription,
}

impl RequestIssuer {
    pub fn new(description: RequestDescription) -> Self {
        Self {
            issued: 0,
            latest: description,
        }
    }

    /// Replace the description used by `issue(None)`.
    pub fn set_latest(&mut self, description: RequestDescription) {
        self.latest = description;
    }

    /// Take the next generation. An explicit description is sent as given
    /// and does not replace the latest one.
    pub fn issue(
        &mut self,
        requested: Option<RequestDescription>,
    ) -> (u64, RequestDescription) {
        self.issued += 1;
        let description = requested.unwrap_or_else(|| self.latest.clone());
        (self.issued, description)
    }
}

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Re-issue a request. `None` repeats the description the hook was last
    /// rendered with; `Some` issues the given description instead.
    pub trigger: Callback<Option<RequestDescription>>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// - No data + loading: "Loading {context}..."
    /// - No data + error: "Error loading {context}: ..."
    /// - Has data: call `render_fn` with (data, is_loading, error), where
    ///   the error belongs to a failed refetch and the data is from the
    ///   previous successful fetch.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match self.data.as_ref() {
            None => {
                if self.is_loading {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Loading {}...", context)}
                            </p>
                        </div>
                    }
                } else if let Some(error) = &self.error {
                    html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                   dark:bg-red-900/20 border \
                                   border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 \
                                      dark:text-red-400">
                                {format!("Error loading {}: {}", context, error)}
                            </p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("No {} found", context)}
                            </p>
                        </div>
                    }
                }
            }
            Some(data) => render_fn(data, self.is_loading, self.error.as_ref()),
        }
    }
}

/// Fetch hook driven by a [`RequestDescription`].
///
/// Issues the request on mount and whenever `trigger` (or `refetch`) is
/// emitted. Changing the description between renders does not fetch by
/// itself; it only changes what the next `trigger.emit(None)` sends.
/// Failures land in `error` and are never propagated to the caller.
///
/// # Example
///
/// ```ignore
/// let fetch = use_fetch::<Vec<Tutorial>>(
///     TutorialFilter::by_title(&search).request(),
/// );
/// let on_search = {
///     let trigger = fetch.trigger.clone();
///     Callback::from(move |_| trigger.emit(None))
/// };
/// ```
#[hook]
pub fn use_fetch<T>(description: RequestDescription) -> FetchHookReturn<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let status = use_reducer(FetchStatus::<T>::default);
    let issuer = use_mut_ref(|| RequestIssuer::new(description.clone()));
    issuer.borrow_mut().set_latest(description);

    let trigger = {
        let dispatcher = status.dispatcher();

        use_callback((), move |requested: Option<RequestDescription>, _| {
            let (generation, description) =
                issuer.borrow_mut().issue(requested);

            tracing::debug!(%description, generation, "issuing request");
            dispatcher.dispatch(FetchAction::Started(generation));

            let dispatcher = dispatcher.clone();
            yew::platform::spawn_local(async move {
                match get_api_client().execute::<T>(&description).await {
                    Ok(data) => {
                        dispatcher
                            .dispatch(FetchAction::Succeeded(generation, data));
                    }
                    Err(e) => {
                        tracing::warn!(
                            %description,
                            generation,
                            "request failed: {e}"
                        );
                        dispatcher.dispatch(FetchAction::Failed(
                            generation,
                            e.to_string(),
                        ));
                    }
                }
            });
        })
    };

    // Fetch once on mount
    {
        let trigger = trigger.clone();
        use_effect_with((), move |_| {
            trigger.emit(None);
        });
    }

    // Nothing issued yet means the mount fetch is about to start
    let is_loading = status.is_loading || status.generation() == 0;

    FetchHookReturn {
        data: status.data.clone(),
        is_loading,
        error: status.error.clone(),
        trigger: trigger.clone(),
        refetch: Callback::from(move |_| trigger.emit(None)),
    }
}
