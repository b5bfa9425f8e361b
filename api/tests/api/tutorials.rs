use jiff::Span;
use payloads::{
    Method, RequestDescription, Tutorial, TutorialId,
    requests::{CreateTutorial, TutorialFilter, UpdateTutorial},
};
use reqwest::StatusCode;
use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn create_read_update_delete_tutorial() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let created = app.create_test_tutorials().await?;
    let tutorial_id = created[0].id;

    let fetched = app.client.get_tutorial(&tutorial_id).await?;
    assert_eq!(fetched, created[0]);
    assert_eq!(fetched.created_at, Some(app.time_source.now()));

    app.time_source.advance(Span::new().minutes(5));
    let updated = app
        .client
        .update_tutorial(
            &tutorial_id,
            &UpdateTutorial {
                title: Some("React Basics, Revised".into()),
                published: Some(false),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.title, "React Basics, Revised");
    assert_eq!(updated.description, created[0].description);
    assert!(!updated.published);
    assert_eq!(updated.created_at, created[0].created_at);
    assert_eq!(updated.updated_at, Some(app.time_source.now()));

    let message = app.client.delete_tutorial(&tutorial_id).await?;
    assert_eq!(message.message, "Tutorial was deleted successfully!");
    assert!(
        app.client
            .get_tutorial(&tutorial_id)
            .await
            .unwrap_err()
            .to_string()
            .contains("Tutorial not found")
    );

    Ok(())
}

#[tokio::test]
async fn list_tutorials_filters_by_title() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_test_tutorials().await?;

    let all = app.client.list_tutorials(&TutorialFilter::default()).await?;
    assert_eq!(all.len(), 3);

    let react = app
        .client
        .list_tutorials(&TutorialFilter::by_title("react"))
        .await?;
    let titles: Vec<_> = react.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["React Basics", "Advanced React Hooks"]);

    let none = app
        .client
        .list_tutorials(&TutorialFilter::by_title("Haskell"))
        .await?;
    assert!(none.is_empty());

    Ok(())
}

#[tokio::test]
async fn execute_described_request() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_test_tutorials().await?;

    let description =
        RequestDescription::get("tutorials").with_param("title", "Rust");
    let tutorials: Vec<Tutorial> = app.client.execute(&description).await?;
    assert_eq!(tutorials.len(), 1);
    assert_eq!(tutorials[0].title, "Rust Ownership");

    let missing = RequestDescription::new(Method::Get, "tutorials/999");
    assert_status_code(
        app.client.execute::<Tutorial>(&missing).await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}

#[tokio::test]
async fn list_published_tutorials() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_test_tutorials().await?;

    let published = app.client.list_published_tutorials().await?;
    assert_eq!(published.len(), 2);
    assert!(published.iter().all(|t| t.published));

    Ok(())
}

#[tokio::test]
async fn delete_all_tutorials() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_test_tutorials().await?;

    let message = app.client.delete_all_tutorials().await?;
    assert_eq!(message.message, "3 Tutorials were deleted successfully!");

    let remaining =
        app.client.list_tutorials(&TutorialFilter::default()).await?;
    assert!(remaining.is_empty());

    // deleting from an empty store still succeeds
    let message = app.client.delete_all_tutorials().await?;
    assert_eq!(message.message, "0 Tutorials were deleted successfully!");

    Ok(())
}

#[tokio::test]
async fn error_status_codes() -> anyhow::Result<()> {
    let app = spawn_app().await;

    assert_status_code(
        app.client.get_tutorial(&TutorialId(1)).await,
        StatusCode::NOT_FOUND,
    );
    assert_status_code(
        app.client.delete_tutorial(&TutorialId(1)).await,
        StatusCode::NOT_FOUND,
    );
    assert_status_code(
        app.client
            .update_tutorial(&TutorialId(1), &UpdateTutorial::default())
            .await,
        StatusCode::NOT_FOUND,
    );
    assert_status_code(
        app.client
            .create_tutorial(&CreateTutorial {
                title: "   ".into(),
                description: String::new(),
                published: false,
            })
            .await,
        StatusCode::BAD_REQUEST,
    );

    Ok(())
}
