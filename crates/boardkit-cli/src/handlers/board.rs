use crate::cli::BoardAction;
use crate::context::CliContext;
use crate::output;
use boardkit_domain::{BoardOperations, BoardUpdate};

pub async fn handle(ctx: &CliContext, action: BoardAction) -> anyhow::Result<()> {
    match action {
        BoardAction::Create { title } => {
            let board = ctx.service.create_board(ctx.user, title).await?;
            output::output_success(&board);
        }
        BoardAction::List => {
            let boards = ctx.service.list_boards(ctx.user).await?;
            output::output_list(boards);
        }
        BoardAction::Get { id } => {
            let view = ctx.service.get_board(ctx.user, id).await?;
            output::output_success(&view);
        }
        BoardAction::Rename { id, title } => {
            let board = ctx
                .service
                .update_board(ctx.user, id, BoardUpdate { title: Some(title) })
                .await?;
            output::output_success(&board);
        }
        BoardAction::Delete { id } => {
            ctx.service.delete_board(ctx.user, id).await?;
            output::output_success(serde_json::json!({"deleted": id.to_string()}));
        }
    }
    Ok(())
}
