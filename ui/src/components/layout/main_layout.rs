use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State,
    components::{ErrorBanner, layout::Header},
};

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub children: Children,
}

#[function_component]
pub fn MainLayout(props: &MainLayoutProps) -> Html {
    let (state, dispatch) = use_store::<State>();
    let on_dismiss = dispatch.reduce_mut_callback(|s| s.clear_error());

    html! {
        <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
            <Header />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                if let Some(message) = state.error_message.clone() {
                    <ErrorBanner message={message} on_dismiss={Some(on_dismiss)} />
                }
                {for props.children.iter()}
            </main>
        </div>
    }
}
