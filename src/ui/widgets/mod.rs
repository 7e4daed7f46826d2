pub mod hourly;
pub mod search;
pub mod ten_day;
pub mod today;
pub mod tomorrow;

mod shared;

#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = usize::from(buffer.area.width);
    let mut text = String::new();
    for (idx, cell) in buffer.content().iter().enumerate() {
        if idx > 0 && idx % width == 0 {
            text.push('\n');
        }
        text.push_str(cell.symbol());
    }
    text
}
