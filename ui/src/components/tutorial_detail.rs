use payloads::Tutorial;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Label/value pairs shown for a tutorial, in display order.
pub fn detail_fields(tutorial: &Tutorial) -> [(&'static str, String); 3] {
    [
        ("Title:", tutorial.title.clone()),
        ("Description:", tutorial.description.clone()),
        ("Status:", tutorial.status_label().to_string()),
    ]
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub tutorial: Tutorial,
}

/// Preview pane for the selected tutorial with a link to its edit page.
#[function_component]
pub fn TutorialDetail(props: &Props) -> Html {
    html! {
        <div>
            <h4 class="text-lg font-semibold mb-3">{"Tutorial"}</h4>
            {
                detail_fields(&props.tutorial).into_iter().map(|(label, value)| {
                    html! {
                        <div class="mb-1">
                            <label><strong>{label}</strong></label>
                            {" "}
                            {value}
                        </div>
                    }
                }).collect::<Html>()
            }
            <Link<Route>
                to={Route::Tutorial { id: props.tutorial.id }}
                classes="inline-block mt-2 px-2 py-0.5 text-xs font-semibold rounded bg-yellow-400 text-neutral-900"
            >
                {"Edit"}
            </Link<Route>>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::TutorialId;

    #[test]
    fn detail_fields_for_published_tutorial() {
        let tutorial = Tutorial {
            id: TutorialId(1),
            title: "React Basics".into(),
            description: "...".into(),
            published: true,
            created_at: None,
            updated_at: None,
        };
        let fields = detail_fields(&tutorial);
        assert_eq!(fields[0], ("Title:", "React Basics".to_string()));
        assert_eq!(fields[2], ("Status:", "Published".to_string()));
        assert_eq!(
            tutorial.edit_path(),
            Route::Tutorial { id: tutorial.id }.to_path()
        );
    }
}
