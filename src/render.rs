//! Plain-text rendering of a lawn.
//!
//! `W` unmowed grass, `v` mowed grass, `O` stone, `T` tree, `H` fence,
//! `@` the mower. Columns are labelled on top, rows on the left.

use crate::core::GridCoord;
use crate::grid::LawnGrid;

fn digits(n: usize) -> usize {
    n.max(1).ilog10() as usize + 1
}

/// Render `grid` as text, one line per row, ending with a newline.
pub fn render_ascii(grid: &LawnGrid) -> String {
    let row_width = digits(grid.rows().saturating_sub(1));
    let col_width = digits(grid.cols().saturating_sub(1));
    let mut out = String::with_capacity((grid.rows() + 1) * (grid.cols() + 1) * (col_width + 1));

    out.push_str(&" ".repeat(row_width + 1));
    let header: Vec<String> = (0..grid.cols())
        .map(|col| format!("{:>w$}", col, w = col_width))
        .collect();
    out.push_str(&header.join(" "));
    out.push('\n');

    for row in 0..grid.rows() {
        out.push_str(&format!("{:>w$}|", row, w = row_width));
        let cells: Vec<String> = (0..grid.cols())
            .map(|col| {
                let ch = grid
                    .content(GridCoord::new(row as i32, col as i32))
                    .map(|c| c.as_char())
                    .unwrap_or(' ');
                format!("{:>w$}", ch, w = col_width)
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_small_lawn() {
        let mut grid = LawnGrid::from_rows(&["HHHHH", "HWvOH", "HTWWH", "HHHHH"]).unwrap();
        grid.place_agent(GridCoord::new(2, 2)).unwrap();

        let expected = "  0 1 2 3 4\n\
                        0|H H H H H\n\
                        1|H W v O H\n\
                        2|H T @ W H\n\
                        3|H H H H H\n";
        assert_eq!(render_ascii(&grid), expected);
    }

    #[test]
    fn test_render_wide_lawn_aligns_columns() {
        let grid = LawnGrid::fenced(12, 11).unwrap();
        let text = render_ascii(&grid);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 12);
        assert!(lines[0].starts_with("    0  1"));
        assert!(lines[0].ends_with("10 11"));
        assert!(lines[1].starts_with(" 0| H  H"));
        assert!(lines[11].starts_with("10| H"));
        let width = lines[0].len();
        assert!(lines.iter().all(|l| l.len() == width));
    }
}
