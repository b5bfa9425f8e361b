//! Sample tutorials for the development server.
//!
//! The set mixes published and pending records and shares title words
//! across records so that title search has something to narrow down.

use crate::TestApp;
use anyhow::Result;
use jiff::{Span, Timestamp};
use payloads::{Tutorial, requests};

const SAMPLE_TUTORIALS: &[(&str, &str, bool)] = &[
    ("React Basics", "Components, props and state", true),
    ("Advanced React Hooks", "Writing your own data fetching hooks", false),
    ("React Router", "Client side routing for single page apps", true),
    ("Rust Ownership", "Borrowing without tears", true),
    ("Async Rust", "Futures, executors and wakers", false),
    ("Yew Components", "Function components and hooks in Rust", true),
    ("WebAssembly Intro", "Shipping Rust to the browser", false),
];

/// Development dataset of tutorials created through the public API.
pub struct DevDataset {
    pub tutorials: Vec<Tutorial>,
}

impl DevDataset {
    /// Creates the sample tutorials, spacing their timestamps out by an hour
    /// so that the ordering is visible in the data.
    pub async fn create(app: &TestApp) -> Result<Self> {
        let start = Timestamp::now() - Span::new().hours(24);
        app.time_source.set(start);

        let mut tutorials = Vec::with_capacity(SAMPLE_TUTORIALS.len());
        for (title, description, published) in SAMPLE_TUTORIALS {
            let details = requests::CreateTutorial {
                title: title.to_string(),
                description: description.to_string(),
                published: *published,
            };
            tutorials.push(app.client.create_tutorial(&details).await?);
            app.time_source.advance(Span::new().hours(1));
        }

        Ok(Self { tutorials })
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 Available test data:");
        for tutorial in &self.tutorials {
            tracing::info!(
                "   - #{} {} [{}]",
                tutorial.id,
                tutorial.title,
                tutorial.status_label()
            );
        }
    }
}
