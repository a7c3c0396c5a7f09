use memora_core::TableView;

pub const HELP: &str = "Commands: <position> | flip <position> | new | size <easy|medium|hard> | quit";

const CELL_WIDTH: usize = 8;

pub fn render_table(view: &TableView) -> String {
    let mut out = String::new();
    let width = usize::from(view.board_size.width());

    for (row, faces) in view.faces.rows().into_iter().enumerate() {
        for (column, face) in faces.iter().enumerate() {
            let label = match face {
                Some(identifier) => {
                    let mut label: String =
                        identifier.to_string().chars().take(CELL_WIDTH - 1).collect();
                    if view.matched[(row, column)] {
                        label.push('*');
                    }
                    label
                }
                None => format!("#{}", row * width + column),
            };
            out.push_str(&format!("[{label:^cell$}]", cell = CELL_WIDTH));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "{} board, moves: {}, pairs: {}/{}\n",
        view.board_size,
        view.num_moves,
        view.num_pairs_found,
        view.board_size.num_pairs()
    ));
    out
}
