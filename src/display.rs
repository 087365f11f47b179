//! Text renderings of a [`Tree`].
//!
//! There are two: the [`Display`][fmt::Display] impl on `Tree` lists the values in ascending
//! order on one line, and [`Sideways`] draws the tree rotated a quarter turn counter-clockwise so
//! that the root sits on the left and the largest value on top.

use std::fmt;
use std::io;

use crate::tree::{Node, Tree};

/// Written in place of the values when the tree has none.
pub const EMPTY_MESSAGE: &str = "Tree is empty.";

/// Number of spaces per level of indentation in [`Sideways`].
const INDENT: usize = 4;

/// Writes the values in ascending order separated by single spaces and followed by a newline.
///
/// # Examples
///
/// ```
/// use bintree::Tree;
///
/// let mut tree = Tree::new();
/// assert_eq!(tree.to_string(), "Tree is empty.\n");
///
/// tree.insert(2);
/// tree.insert(1);
/// assert_eq!(tree.to_string(), "1 2\n");
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.as_deref() {
            None => writeln!(f, "{}", EMPTY_MESSAGE),
            Some(root) => {
                write_in_order(f, root, &mut true)?;
                writeln!(f)
            }
        }
    }
}

/// `first` is cleared once a value has been written so later values get a separator.
fn write_in_order<T>(f: &mut fmt::Formatter<'_>, node: &Node<T>, first: &mut bool) -> fmt::Result
where
    T: fmt::Display,
{
    if let Some(left) = node.left.as_deref() {
        write_in_order(f, left, first)?;
    }
    if !*first {
        f.write_str(" ")?;
    }
    *first = false;
    write!(f, "{}", node.value)?;
    if let Some(right) = node.right.as_deref() {
        write_in_order(f, right, first)?;
    }
    Ok(())
}

/// A tree drawn on its side: right subtrees above their parent, left subtrees below, one value
/// per line. Each value is indented by four spaces per level plus four, so the root (level 1)
/// starts in column 8.
///
/// Returned by [`Tree::sideways`].
///
/// # Examples
///
/// ```
/// use bintree::Tree;
///
/// let mut tree = Tree::new();
/// for x in [2, 1, 3] {
///     tree.insert(x);
/// }
///
/// let expected = "
///             3
///         2
///             1
/// ";
/// assert_eq!(tree.sideways().to_string(), &expected[1..]);
/// ```
pub struct Sideways<'a, T> {
    root: Option<&'a Node<T>>,
}

impl<T> fmt::Display for Sideways<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => write_sideways(f, root, 1),
            None => Ok(()),
        }
    }
}

fn write_sideways<T>(f: &mut fmt::Formatter<'_>, node: &Node<T>, level: usize) -> fmt::Result
where
    T: fmt::Display,
{
    if let Some(right) = node.right.as_deref() {
        write_sideways(f, right, level + 1)?;
    }
    writeln!(f, "{:indent$}{}", "", node.value, indent = INDENT * (level + 1))?;
    if let Some(left) = node.left.as_deref() {
        write_sideways(f, left, level + 1)?;
    }
    Ok(())
}

impl<T> Tree<T>
where
    T: fmt::Display,
{
    /// Returns an adapter that draws this tree on its side when formatted. See [`Sideways`].
    pub fn sideways(&self) -> Sideways<'_, T> {
        Sideways {
            root: self.root.as_deref(),
        }
    }

    /// Prints this tree on its side to standard output.
    pub fn display_sideways(&self) {
        print!("{}", self.sideways());
    }

    /// Writes this tree on its side to `out`.
    pub fn write_sideways<W>(&self, mut out: W) -> io::Result<()>
    where
        W: io::Write,
    {
        write!(out, "{}", self.sideways())
    }
}
