//! 两列对齐纯文本表格
//! 列表模式的规则摘要输出格式：左对齐、无边框、两列间隔两个空格

/// 两列纯文本表格
/// 列宽取该列所有单元格行的最大宽度，多行单元格换行后与本列对齐
#[derive(Debug, Clone, Default)]
pub struct PlainTable {
    rows: Vec<(String, String)>,
}

impl PlainTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<(String, String)>) -> Self {
        Self { rows }
    }

    /// 追加一行（左列、右列）
    pub fn push(&mut self, left: String, right: String) {
        self.rows.push((left, right));
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 渲染为多行文本
    /// 空表渲染为空字符串；每行行尾空白去除
    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        // 1. 单元格按内部换行拆分
        let split_rows: Vec<(Vec<&str>, Vec<&str>)> = self
            .rows
            .iter()
            .map(|(left, right)| (Self::cell_lines(left), Self::cell_lines(right)))
            .collect();

        // 2. 左列宽度 = 左列所有行的最大字符宽度
        let left_width = split_rows
            .iter()
            .flat_map(|(left, _)| left.iter())
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        // 3. 逐行输出，多行单元格用空白补齐缺行
        let mut rendered = Vec::new();
        for (left, right) in &split_rows {
            let height = left.len().max(right.len());
            for i in 0..height {
                let left_line = left.get(i).copied().unwrap_or("");
                let right_line = right.get(i).copied().unwrap_or("");
                let line = format!("{:<width$}  {}", left_line, right_line, width = left_width);
                rendered.push(line.trim_end().to_string());
            }
        }
        rendered.join("\n")
    }

    /// 单元格拆行；空单元格占一行
    fn cell_lines(cell: &str) -> Vec<&str> {
        if cell.is_empty() {
            vec![""]
        } else {
            cell.lines().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_column_alignment() {
        // 测试场景：左列按最长条目对齐，两列间隔两个空格
        let table = PlainTable::from_rows(vec![
            ("build".to_string(), "Builds the project".to_string()),
            ("deploy".to_string(), "Ships it".to_string()),
        ]);
        assert_eq!(
            table.render(),
            "build   Builds the project\ndeploy  Ships it"
        );
    }

    #[test]
    fn test_multiline_cell_continuation_aligned() {
        // 测试场景：右列多行单元格，后续行与本列起始位置对齐
        let table = PlainTable::from_rows(vec![
            ("a".to_string(), "first\nsecond".to_string()),
            ("bb".to_string(), "third".to_string()),
        ]);
        assert_eq!(table.render(), "a   first\n    second\nbb  third");
    }

    #[test]
    fn test_trailing_whitespace_stripped() {
        // 测试场景：右列为空时不留下对齐用的行尾空白
        let table = PlainTable::from_rows(vec![
            ("ab".to_string(), "".to_string()),
            ("c".to_string(), "d".to_string()),
        ]);
        assert_eq!(table.render(), "ab\nc   d");
    }

    #[test]
    fn test_empty_table_renders_empty() {
        assert_eq!(PlainTable::new().render(), "");
    }
}
