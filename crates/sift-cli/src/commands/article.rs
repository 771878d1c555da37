use sift_core::enums::ArticleStatus;
use sift_db::repos::article::NewArticle;
use sift_db::updates::article::{ArticleUpdate, ArticleUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ArticleCommands, ArticleFields};
use crate::commands::shared::limit::limited;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sift article`.
pub async fn handle(
    action: &ArticleCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        ArticleCommands::Create { review, fields } => {
            let article = svc.create_article(review, &new_article(fields)).await?;
            tracing::info!(id = %article.id, "created article");
            output(&article, flags.format)
        }
        ArticleCommands::Get { id } => output(&svc.get_article(id).await?, flags.format),
        ArticleCommands::Update {
            id,
            fields,
            no_source,
        } => {
            let article = svc
                .update_article(id, article_update(fields, *no_source))
                .await?;
            tracing::info!(%id, "updated article");
            output(&article, flags.format)
        }
        ArticleCommands::Status { id, status } => {
            let status: ArticleStatus = parse_enum(status, "status")?;
            let article = svc.set_article_status(id, status).await?;
            tracing::info!(%id, status = status.code(), "classified article");
            output(&article, flags.format)
        }
        ArticleCommands::Delete { id } => {
            svc.delete_article(id).await?;
            tracing::info!(%id, "deleted article");
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        ArticleCommands::List {
            review,
            source,
            accepted,
        } => {
            let articles = if *accepted {
                svc.accepted_articles_of(review).await?
            } else {
                svc.articles_of(review, source.as_deref()).await?
            };
            output(&limited(articles, ctx, flags), flags.format)
        }
    }
}

fn new_article(fields: &ArticleFields) -> NewArticle {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    NewArticle {
        bibtex_key: text(&fields.bibtex_key),
        title: text(&fields.title),
        author: text(&fields.author),
        journal: text(&fields.journal),
        year: text(&fields.year),
        volume: text(&fields.volume),
        pages: text(&fields.pages),
        abstract_text: text(&fields.abstract_text),
        document_type: text(&fields.document_type),
        author_keywords: text(&fields.keywords),
        note: text(&fields.note),
        source_id: fields.source.clone(),
        search_session_id: fields.session.clone(),
        ..NewArticle::default()
    }
}

fn article_update(fields: &ArticleFields, no_source: bool) -> ArticleUpdate {
    let mut builder = ArticleUpdateBuilder::new();
    if let Some(v) = &fields.bibtex_key {
        builder = builder.bibtex_key(v);
    }
    if let Some(v) = &fields.title {
        builder = builder.title(v);
    }
    if let Some(v) = &fields.author {
        builder = builder.author(v);
    }
    if let Some(v) = &fields.journal {
        builder = builder.journal(v);
    }
    if let Some(v) = &fields.year {
        builder = builder.year(v);
    }
    if let Some(v) = &fields.volume {
        builder = builder.volume(v);
    }
    if let Some(v) = &fields.pages {
        builder = builder.pages(v);
    }
    if let Some(v) = &fields.abstract_text {
        builder = builder.abstract_text(v);
    }
    if let Some(v) = &fields.document_type {
        builder = builder.document_type(v);
    }
    if let Some(v) = &fields.keywords {
        builder = builder.author_keywords(v);
    }
    if let Some(v) = &fields.note {
        builder = builder.note(v);
    }
    if no_source {
        builder = builder.source_id(None);
    } else if let Some(v) = &fields.source {
        builder = builder.source_id(Some(v.clone()));
    }
    if let Some(v) = &fields.session {
        builder = builder.search_session_id(Some(v.clone()));
    }
    builder.build()
}
