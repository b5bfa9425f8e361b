use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub message: AttrValue,
    /// Shows a dismiss button when set.
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
}

#[function_component]
pub fn ErrorBanner(props: &Props) -> Html {
    html! {
        <div class="p-4 mb-3 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 flex items-start justify-between gap-4">
            <p class="text-sm text-red-700 dark:text-red-400">{&props.message}</p>
            if let Some(on_dismiss) = props.on_dismiss.clone() {
                <button
                    class="text-sm text-red-700 dark:text-red-400 hover:underline"
                    onclick={Callback::from(move |_: MouseEvent| on_dismiss.emit(()))}
                >
                    {"Dismiss"}
                </button>
            }
        </div>
    }
}
