use std::{
    fmt::Debug,
    fs::File,
    io::{self, BufRead, BufReader},
    marker::PhantomData,
    ops::Deref,
    path::Path,
};

/// Open the puzzle input, the file at `path` if given, otherwise standard input.
pub fn open_input(path: Option<&Path>) -> io::Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(p) => Box::new(BufReader::new(File::open(p)?)),
        None => Box::new(io::stdin().lock()),
    })
}

/// Name of the input source for messages.
pub fn describe_input(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdin".to_string())
}

pub fn lines<R: BufRead>(reader: R) -> io::Lines<R> {
    reader.lines()
}

/// Split a stream of lines into runs of non-blank lines.
pub fn groups<I>(lines: I) -> Groups<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    Groups {
        lines,
        finished: false,
    }
}

pub struct Groups<I> {
    lines: I,
    finished: bool,
}

impl<I> Iterator for Groups<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut group = Vec::new();
        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    if !line.trim().is_empty() {
                        group.push(line);
                    } else if !group.is_empty() {
                        return Some(Ok(group));
                    }
                }
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                None => {
                    self.finished = true;
                    // Remember the last group without trailing blank line.
                    return (!group.is_empty()).then_some(Ok(group));
                }
            }
        }
    }
}

/// A value carrying a compile time tag, e.g. a proof that it has been sorted.
pub struct Tagged<Tag, T> {
    value: T,
    _tag: PhantomData<Tag>,
}

impl<Tag, T> Tagged<Tag, T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            _tag: PhantomData,
        }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<Tag, T> Deref for Tagged<Tag, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<Tag, T: Clone> Clone for Tagged<Tag, T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<Tag, T: Copy> Copy for Tagged<Tag, T> {}

impl<Tag, T: PartialEq> PartialEq for Tagged<Tag, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<Tag, T: Eq> Eq for Tagged<Tag, T> {}

impl<Tag, T: PartialOrd> PartialOrd for Tagged<Tag, T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<Tag, T: Ord> Ord for Tagged<Tag, T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<Tag, T: Debug> Debug for Tagged<Tag, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.value.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups_of(text: &str) -> Vec<Vec<String>> {
        groups(lines(text.as_bytes()))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn groups_split_on_blank_lines() {
        let gs = groups_of("abc\n\na\nb\nc\n\nab\nac\n");
        assert_eq!(gs.len(), 3);
        assert_eq!(gs[1], vec!["a", "b", "c"]);
        assert_eq!(gs[2], vec!["ab", "ac"]);
    }

    #[test]
    fn groups_skip_repeated_and_whitespace_blank_lines() {
        let gs = groups_of("\n\nx\n  \n\n\ny\nz");
        assert_eq!(gs, vec![vec!["x"], vec!["y", "z"]]);
    }

    #[test]
    fn groups_of_empty_input_is_empty() {
        assert!(groups_of("").is_empty());
        assert!(groups_of("\n\n").is_empty());
    }

    #[test]
    fn tagged_derefs_to_value() {
        struct Even;
        let n = Tagged::<Even, usize>::new(4);
        assert_eq!(*n + 1, 5);
        assert_eq!(n.into_inner(), 4);
    }
}
