use crate::cli::{CardAction, CardUpdateArgs};
use crate::context::CliContext;
use crate::output;
use boardkit_domain::{BoardOperations, CardUpdate, FieldUpdate};
use chrono::{DateTime, NaiveDate, Utc};

pub async fn handle(ctx: &CliContext, action: CardAction) -> anyhow::Result<()> {
    match action {
        CardAction::Create(args) => {
            let card = ctx
                .service
                .create_card(ctx.user, args.list_id, args.title, args.description)
                .await?;
            output::output_success(&card);
        }
        CardAction::Get { id } => {
            let card = ctx.service.get_card(ctx.user, id).await?;
            output::output_success(&card);
        }
        CardAction::Update(args) => {
            let id = args.id;
            let updates = build_card_update(args).map_err(|e| anyhow::anyhow!(e))?;
            let card = ctx.service.update_card(ctx.user, id, updates).await?;
            output::output_success(&card);
        }
        CardAction::Move {
            id,
            list_id,
            position,
        } => {
            let card = ctx.service.move_card(ctx.user, id, list_id, position).await?;
            output::output_success(&card);
        }
        CardAction::Archive { id } => {
            let card = ctx.service.archive_card(ctx.user, id).await?;
            output::output_success(&card);
        }
    }
    Ok(())
}

fn build_card_update(args: CardUpdateArgs) -> Result<CardUpdate, String> {
    let description = if args.clear_description {
        FieldUpdate::Clear
    } else {
        args.description.map_or(FieldUpdate::NoChange, FieldUpdate::Set)
    };

    let due_date = if args.clear_due_date {
        FieldUpdate::Clear
    } else {
        match args.due_date {
            Some(raw) => FieldUpdate::Set(parse_due_date(&raw)?),
            None => FieldUpdate::NoChange,
        }
    };

    Ok(CardUpdate {
        title: args.title,
        description,
        due_date,
        archived: args.archived,
    })
}

/// Accepts RFC 3339 timestamps or bare dates, which land at midnight UTC.
fn parse_due_date(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Ok(datetime.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
        .ok_or_else(|| format!("Invalid due date: {} (expected RFC 3339 or YYYY-MM-DD)", raw))
}
