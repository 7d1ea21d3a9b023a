//! News feed command handlers.

use owo_colors::OwoColorize;
use tabled::Tabled;

use riftline_core::{NewsArticle, content};

use crate::cli::{NewsArgs, NewsCommand};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ArticleRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "")]
    featured: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Published")]
    published: String,
    #[tabled(rename = "Read")]
    read: String,
}

fn article_row(a: &NewsArticle, color: bool) -> ArticleRow {
    let featured = if !a.featured {
        String::new()
    } else if color {
        format!("{}", "★".yellow())
    } else {
        "★".to_string()
    };
    ArticleRow {
        id: a.id.to_string(),
        featured,
        title: a.title.clone(),
        category: a.category.to_string(),
        published: a.published.to_string(),
        read: format!("{} min", a.read_minutes),
    }
}

fn detail(a: &NewsArticle) -> String {
    let mut lines = vec![
        format!("ID:         {}", a.id),
        format!("Title:      {}", a.title),
        format!("Category:   {}", a.category),
        format!("Published:  {}", a.published),
        format!("Read time:  {} min", a.read_minutes),
    ];
    if a.featured {
        lines.push("Featured:   yes".to_string());
    }
    lines.push(String::new());
    lines.push(a.excerpt.clone());
    lines.push(String::new());
    lines.push(a.body.clone());
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: NewsArgs, settings: &Settings) -> Result<(), CliError> {
    match args.command {
        NewsCommand::List {
            search,
            category,
            featured,
        } => {
            let color = output::should_color(&settings.color);
            let controller = util::select(
                content::news_articles(),
                search.as_deref(),
                &[("category", category.map(|c| c.to_string()))],
            )?;

            // --featured narrows after the catalog filters; it is a field
            // of the article, not a facet.
            let results: Vec<&NewsArticle> = controller
                .results()
                .into_iter()
                .filter(|a| !featured || a.featured)
                .collect();

            let out = output::render_list(
                &settings.output,
                &results,
                |a| article_row(a, color),
                |a| a.id.to_string(),
            );
            output::print_output(&out, settings.quiet);
            Ok(())
        }

        NewsCommand::Get { article } => {
            let store = content::news_articles();
            let found = util::find_record(&store, &article, |a| &a.title, "article", "news list")?;
            let out = output::render_single(&settings.output, found, detail, |a| a.id.to_string());
            output::print_output(&out, settings.quiet);
            Ok(())
        }
    }
}
