//! Plain-text rendering of the feed and article detail views.

use std::io::{self, Write};

use chrono::Local;
use newsreader_core::{Article, FeedView, Filter};

use crate::routes::{self, RouteError};

pub(crate) fn welcome() {
    println!("newsreader - search, browse and open syndicated news");
    println!("type `help` for commands");
}

pub(crate) fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

pub(crate) fn help() {
    println!("commands:");
    println!("  search <text>     free-text search, newest first");
    println!("  category <name>   one of business, entertainment, general,");
    println!("                    health, science, sports, technology, or `all`");
    println!("  more              load the next page of the current feed");
    println!("  open <path>       open `/` (feed) or a `/news/...` detail link");
    println!("  reset             clear the feed");
    println!("  quit              leave");
}

pub(crate) fn feed(view: &FeedView) {
    if let Some(error) = &view.error {
        println!("! {error}");
    }
    if view.loading {
        println!("loading {}...", filter_label(&view.filter));
        return;
    }
    if view.articles.is_empty() {
        if view.error.is_none() {
            println!("no articles for {}", filter_label(&view.filter));
        }
        return;
    }

    println!(
        "-- {}: {} of {} results --",
        filter_label(&view.filter),
        view.articles.len(),
        view.total_results
    );
    for article in &view.articles {
        println!("  {}  [{}]", article.title, article.source_name);
        println!("      {}", routes::article_route(&article.url));
    }
    if view.loading_more {
        println!("loading more...");
    } else if view.has_more {
        println!("(`more` loads page {})", view.current_page + 1);
    } else {
        println!("(end of results)");
    }
}

pub(crate) fn detail(article: &Article) {
    let date = article
        .published_at
        .with_timezone(&Local)
        .format("%e %B %Y, %H:%M");
    println!();
    println!("{}", article.title);
    match &article.author {
        Some(author) => println!("{} | {} | {}", article.source_name, author, date),
        None => println!("{} | {}", article.source_name, date),
    }
    if let Some(description) = &article.description {
        println!();
        println!("{description}");
    }
    if let Some(content) = &article.content {
        println!();
        for paragraph in content.split('\n').filter(|p| !p.trim().is_empty()) {
            println!("{paragraph}");
        }
    }
    println!();
    println!("full story: {}", article.url);
}

pub(crate) fn not_found(url: &str) {
    println!("article not found in this session: {url}");
    println!("only articles currently in the feed can be opened; `open /` goes back");
}

pub(crate) fn route_error(err: &RouteError) {
    println!("{err}");
    println!("`open /` shows the feed again");
}

fn filter_label(filter: &Filter) -> String {
    match filter {
        Filter::Query(query) => format!("search {query:?}"),
        Filter::Category(category) => format!("{category} headlines"),
        Filter::Country(country) => format!("top headlines ({country})"),
    }
}
