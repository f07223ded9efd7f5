use crate::cli::ListAction;
use crate::context::CliContext;
use crate::output;
use boardkit_domain::{BoardOperations, ListUpdate};

pub async fn handle(ctx: &CliContext, action: ListAction) -> anyhow::Result<()> {
    match action {
        ListAction::Create { board_id, title } => {
            let list = ctx.service.create_list(ctx.user, board_id, title).await?;
            output::output_success(&list);
        }
        ListAction::Rename { id, title } => {
            let list = ctx
                .service
                .update_list(ctx.user, id, ListUpdate { title: Some(title) })
                .await?;
            output::output_success(&list);
        }
        ListAction::Delete { id } => {
            ctx.service.delete_list(ctx.user, id).await?;
            output::output_success(serde_json::json!({"deleted": id.to_string()}));
        }
        ListAction::ArchiveCards { id } => {
            let archived = ctx.service.archive_all_in_list(ctx.user, id).await?;
            output::output_success(serde_json::json!({
                "list": id.to_string(),
                "archived_count": archived,
            }));
        }
    }
    Ok(())
}
