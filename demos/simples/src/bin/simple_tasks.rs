use chrono::Utc;
use std::env;
use task_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    let config = Config::new();
    info!("Using API at {}", config.rest_api.base_url);
    let client = TaskApiClient::new(config)?;

    // Report when the session ends behind our back
    let mut events = client.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                SessionEvent::TokenRefreshed => info!("Access token renewed"),
                SessionEvent::Invalidated { reason } => {
                    warn!("Session ended ({reason}), please log in again")
                }
            }
        }
    });

    let auth = client.auth();
    if !auth.is_authenticated().await? {
        let username = env::var("TASK_USERNAME")?;
        let password = env::var("TASK_PASSWORD")?;
        auth.login(&LoginRequest::new(&username, &password)).await?;
    }

    if let Some(user) = auth.cached_user().await? {
        info!("Signed in as {}", user.display_name());
    }

    let now = Utc::now();
    let pending = client.tasks().get_pending().await?;
    info!("{} pending tasks", pending.len());
    for task in &pending {
        let marker = if task.is_overdue(now) { "!" } else { " " };
        info!("{marker} #{} [{}] {}", task.id, task.priority.as_str(), task.title);
    }

    let stats = client.tasks().get_statistics().await?;
    info!(
        "Completed {}/{} ({:.0}%)",
        stats.completed_tasks,
        stats.total_tasks,
        stats.completion_rate() * 100.0
    );

    Ok(())
}
