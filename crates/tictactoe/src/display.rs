//! Plain-text rendering of a board.

use tictactoe_engine::{Board, Side, Square};

/// Renders `board` with row and column indices.
///
/// ```text
///    0   1   2
/// 0  X | O |
///   --- --- ---
/// 1    | X |
///   --- --- ---
/// 2    |   | O
/// ```
pub fn render(board: &Board) -> String {
    let size = board.size();
    let mut out = String::from("   ");
    let header: Vec<String> = (0..size).map(|c| c.to_string()).collect();
    out.push_str(&header.join("   "));
    out.push_str("  \n");

    let separator = format!("\n  {}\n", vec!["---"; size].join(" "));
    let rows: Vec<String> = board
        .rows()
        .enumerate()
        .map(|(r, row)| {
            let cells: Vec<&str> = row.iter().map(|sq| symbol(*sq)).collect();
            format!("{}  {}", r, cells.join(" | "))
        })
        .collect();
    out.push_str(&rows.join(&separator));
    out.push('\n');
    out
}

fn symbol(square: Square) -> &'static str {
    match square {
        Square::Empty => " ",
        Square::Occupied(Side::X) => "X",
        Square::Occupied(Side::O) => "O",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::Move;

    #[test]
    fn test_render_three_by_three() {
        let mut board = Board::default();
        board.update(&Move::new(Side::X, 0, 0));
        board.update(&Move::new(Side::O, 0, 1));
        board.update(&Move::new(Side::X, 1, 1));
        board.update(&Move::new(Side::O, 2, 2));

        let expected = "   0   1   2  \n\
                        0  X | O |  \n  \
                        --- --- ---\n\
                        1    | X |  \n  \
                        --- --- ---\n\
                        2    |   | O\n";
        assert_eq!(render(&board), expected);
    }

    #[test]
    fn test_render_scales_with_size() {
        let board = Board::new(4).unwrap();
        let text = render(&board);
        assert!(text.starts_with("   0   1   2   3  \n"));
        assert_eq!(text.matches("--- --- --- ---").count(), 3);
        assert_eq!(text.lines().count(), 4 + 3 + 1);
    }

    #[test]
    fn test_render_single_square() {
        let board = Board::new(1).unwrap();
        assert_eq!(render(&board), "   0  \n0   \n");
    }
}
