//! Template tree: the static, unrendered file/directory skeleton
//!
//! A tree is authored once by the template definitions and never mutated
//! afterwards. Names and contents may carry `{...}` placeholders that the
//! replacement pipeline resolves during materialization.

/// A virtual file with normalized contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: String,
    pub contents: String,
}

impl File {
    /// Create a file from a single string, normalizing to exactly one
    /// trailing newline.
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        let mut contents = contents.into();
        let trimmed = contents.trim_end_matches('\n').len();
        contents.truncate(trimmed);
        contents.push('\n');
        Self {
            name: name.into(),
            contents,
        }
    }

    /// Create a file from an ordered sequence of lines.
    pub fn from_lines<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = lines
            .into_iter()
            .map(|l| l.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self::new(name, joined)
    }
}

/// A virtual directory holding child nodes in insertion order
///
/// Child names are unique per level; the template definitions are authored
/// statically so this is an invariant, not a checked runtime condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    pub name: String,
    pub children: Vec<Node>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Add a file built from a single string.
    pub fn file(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.children.push(Node::File(File::new(name, contents)));
        self
    }

    /// Add a file built from an ordered sequence of lines.
    pub fn file_lines<I, S>(mut self, name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.children.push(Node::File(File::from_lines(name, lines)));
        self
    }

    /// Add a subdirectory through a builder callback.
    pub fn dir(mut self, name: impl Into<String>, build: impl FnOnce(Directory) -> Directory) -> Self {
        self.children.push(Node::Directory(build(Directory::new(name))));
        self
    }
}

/// A node is either a file or a directory; directories are both values and
/// containers, so traversal stays exhaustive over the two variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File(File),
    Directory(Directory),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => &file.name,
            Node::Directory(dir) => &dir.name,
        }
    }
}
