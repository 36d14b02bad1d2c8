//! Conditional compilation blocks
//!
//! ```text
//! IfConfigDecl
//!   IfConfigClause
//!     PoundIf IfConfigCondition items*
//!   IfConfigClause
//!     PoundElseif IfConfigCondition items*
//!   IfConfigClause
//!     PoundElse items*
//!   PoundEndif
//! ```

use sparrow_syntax_tree::SyntaxKind;

use crate::block::items;
use crate::cursor::Cursor;
use crate::event::Checkpoint;

const CLAUSE_ENDS: &[SyntaxKind] =
    &[SyntaxKind::PoundElseif, SyntaxKind::PoundElse, SyntaxKind::PoundEndif];

pub fn if_config_declaration(p: &mut Cursor, checkpoint: Checkpoint, stop: &[SyntaxKind]) {
    p.start_node_at(checkpoint, SyntaxKind::IfConfigDecl);

    let mut clause_stop = CLAUSE_ENDS.to_vec();
    clause_stop.extend_from_slice(stop);

    while p.at_any(&[SyntaxKind::PoundIf, SyntaxKind::PoundElseif, SyntaxKind::PoundElse]) {
        p.start_node(SyntaxKind::IfConfigClause);
        let has_condition = !p.at(SyntaxKind::PoundElse);
        p.bump();

        if has_condition {
            p.start_node(SyntaxKind::IfConfigCondition);
            let mut consumed = false;
            while !p.at_eof() && !(consumed && p.newline_before()) {
                p.bump();
                consumed = true;
            }
            if !consumed {
                p.error("expected a condition");
            }
            p.finish_node();
        }

        items(p, &clause_stop);
        p.finish_node();
    }

    p.expect(SyntaxKind::PoundEndif, "`#endif`");
    p.finish_node();
}
