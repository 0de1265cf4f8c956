use crate::environment::{repository::Repository, Environment};
use crate::environment::types::Config;
use crate::view_model::{format_timestamp, PostOrder};
use crate::Store;

const SERVER_URL_ENV: &str = "READABLE_SERVER_URL";

pub fn run() -> Result<(), String> {
    use env_logger::Env;
    use std::io::Write;
    env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .init();

    let repository = Repository::new()?;
    if let Ok(url) = std::env::var(SERVER_URL_ENV) {
        log::debug!("Using server url {url} from {SERVER_URL_ENV}");
        repository.set_config(&Config { server_url: url })?;
    }
    let environment = Environment::from_repository(repository)?;

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| format!("Could not start runtime: {e:?}"))?;
    runtime.block_on(load(environment))
}

/// Fetch categories and posts in parallel and list them
async fn load(environment: Environment) -> Result<(), String> {
    let mut store = Store::new();
    let dispatcher = store.dispatcher(environment.model.clone());
    dispatcher.fetch_categories();
    dispatcher.fetch_posts();

    let mut failures = Vec::new();
    for _ in 0..2 {
        if let Some(crate::Action::OperationFailed { operation, cause }) = store.next().await {
            failures.push(format!("{operation}: {cause}"));
        }
    }
    if !failures.is_empty() {
        return Err(failures.join("\n"));
    }

    let state = store.state();
    for category in state.categories() {
        println!("[{}]", category.name);
        for post in PostOrder::default().sorted(state.posts_in_category(&category.name)) {
            println!(
                "  {:<40} {} {:>3} comments {:>3} votes",
                post.title,
                format_timestamp(post.timestamp),
                post.comment_count,
                post.vote_score
            );
        }
    }
    Ok(())
}
