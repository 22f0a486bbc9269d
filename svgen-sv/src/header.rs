//! File header banner generation.

/// Metadata rendered into a generated file's header banner.
///
/// The creation date is an explicit ISO string (`YYYY-MM-DD`) so rendering
/// stays deterministic; the copyright line is omitted when `copyright` is
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub project: String,
    pub description: String,
    pub filename: String,
    pub date: String,
    pub copyright: Option<String>,
}

impl HeaderInfo {
    pub fn new(
        title: impl Into<String>,
        project: impl Into<String>,
        description: impl Into<String>,
        filename: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            project: project.into(),
            description: description.into(),
            filename: filename.into(),
            date: date.into(),
            copyright: None,
        }
    }

    /// Add a copyright owner; the year is taken from the creation date.
    pub fn with_copyright(mut self, owner: impl Into<String>) -> Self {
        self.copyright = Some(owner.into());
        self
    }

    fn year(&self) -> &str {
        self.date.split('-').next().unwrap_or(&self.date)
    }
}

/// Render the header banner for a generated file.
pub fn header(info: &HeaderInfo) -> String {
    let rule = "-".repeat(78);
    let mut out = format!(
        "/*{rule}\n \
         |  Title   : {title}\n \
         |  Project : {project}\n \
         +{rule}\n \
         |  Automatically generated with svgen\n \
         |\n \
         +{rule}\n \
         |  Description:\n \
         |  {description}\n \
         +{rule}\n \
         | File     : {filename}\n \
         | Language : SystemVerilog\n \
         | Created  : {date}\n \
         +{rule}\n",
        title = info.title,
        project = info.project,
        description = info.description,
        filename = info.filename,
        date = info.date,
    );
    if let Some(owner) = &info.copyright {
        out.push_str(&format!(
            " |  Copyright (c) {owner} {year}\n +{rule}\n",
            year = info.year()
        ));
    }
    out.push_str(" */\n");
    out
}
