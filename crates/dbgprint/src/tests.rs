use crate::*;
use expect_test::expect;
use quickcheck_macros::quickcheck;
use std::borrow::Cow;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::{Arc, Mutex};

// tests which replace the global stream must not interleave
static SINK_LOCK: Mutex<()> = Mutex::new(());

fn capture(f: impl FnOnce()) -> String {
    let _guard = SINK_LOCK.lock().unwrap_or_else(|err| err.into_inner());
    let buffer = SharedBuffer::new();
    let previous = set_debug_stream(buffer.clone());
    f();
    set_debug_stream(previous);
    buffer.contents()
}

/// Undo the escapes written by `write_escaped_str`.
fn unescape(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push(match chars.next()? {
                '0' => '\0',
                't' => '\t',
                'n' => '\n',
                'r' => '\r',
                other => other,
            }),
            '"' | '\'' => return None,
            c => out.push(c),
        }
    }
    Some(out)
}

#[test]
fn booleans() {
    assert_eq!(to_repr(&true), "True");
    assert_eq!(to_repr(&false), "False");
    assert_eq!(to_repr(&vec![true, false]), "[True,False]");
}

#[test]
fn escaped_chars() {
    assert_eq!(to_repr(&'\0'), r"'\0'");
    assert_eq!(to_repr(&'\t'), r"'\t'");
    assert_eq!(to_repr(&'\n'), r"'\n'");
    assert_eq!(to_repr(&'\r'), r"'\r'");
    assert_eq!(to_repr(&'\''), r"'\''");
    assert_eq!(to_repr(&'"'), r#"'\"'"#);
    assert_eq!(to_repr(&'\\'), r"'\\'");
}

#[test]
fn plain_chars() {
    assert_eq!(to_repr(&'x'), "'x'");
    assert_eq!(to_repr(&' '), "' '");
    assert_eq!(to_repr(&'λ'), "'λ'");
}

#[test]
fn strings() {
    assert_eq!(to_repr("a\"b"), r#""a\"b""#);
    assert_eq!(to_repr(&String::from("tab\there")), r#""tab\there""#);
    assert_eq!(to_repr(&Cow::Borrowed("it's")), r#""it\'s""#);
    assert_eq!(to_repr(""), r#""""#);
    assert_eq!(to_repr("back\\slash\n"), r#""back\\slash\n""#);
}

#[test]
fn numbers_use_display() {
    assert_eq!(to_repr(&1), "1");
    assert_eq!(to_repr(&-7i8), "-7");
    assert_eq!(to_repr(&(b'x')), "120");
    assert_eq!(to_repr(&(1i64 << 60)), "1152921504606846976");
    assert_eq!(to_repr(&2.0f64), "2");
    assert_eq!(to_repr(&0.5f32), "0.5");
}

#[test]
fn pairs_and_tuples() {
    assert_eq!(to_repr(&(3, 4)), "<3,4>");
    assert_eq!(to_repr(&(1,)), "<1>");
    assert_eq!(to_repr(&()), "<>");
    assert_eq!(to_repr(&('a', "b", true)), r#"<'a',"b",True>"#);
    assert_eq!(
        to_repr(&(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12)),
        "<1,2,3,4,5,6,7,8,9,10,11,12>"
    );
}

#[test]
fn sequences() {
    assert_eq!(to_repr(&Vec::<i32>::new()), "[]");
    assert_eq!(to_repr(&vec![1, 2, 3]), "[1,2,3]");
    assert_eq!(to_repr(&[1, 2, 3]), "[1,2,3]");
    assert_eq!(to_repr(&[5, 6][..]), "[5,6]");
    assert_eq!(to_repr(&VecDeque::from(vec![7, 8])), "[7,8]");
    assert_eq!(to_repr(&[0u8; 0]), "[]");

    let list: LinkedList<_> = vec!['a', 'b'].into_iter().collect();
    assert_eq!(to_repr(&list), "['a','b']");
}

#[test]
fn sets_and_maps() {
    let set: BTreeSet<_> = vec![3, 1, 2].into_iter().collect();
    assert_eq!(to_repr(&set), "{1,2,3}");
    assert_eq!(to_repr(&BTreeSet::<i32>::new()), "{}");

    let single: HashSet<_> = vec!["x"].into_iter().collect();
    assert_eq!(to_repr(&single), r#"{"x"}"#);

    let mut map = BTreeMap::new();
    map.insert(2, "two");
    map.insert(1, "one");
    assert_eq!(to_repr(&map), r#"{1:"one",2:"two"}"#);

    let mut hash_map = HashMap::new();
    hash_map.insert('k', vec![1]);
    assert_eq!(to_repr(&hash_map), "{'k':[1]}");
    assert_eq!(to_repr(&HashMap::<i32, i32>::new()), "{}");
}

#[test]
fn heaps_print_in_pop_order() {
    let heap: BinaryHeap<_> = vec![1, 3, 2].into_iter().collect();
    assert_eq!(to_repr(&heap), "[3,2,1]");
    assert_eq!(heap.len(), 3);

    let min_heap: BinaryHeap<_> = vec![Reverse(4), Reverse(1), Reverse(9)]
        .into_iter()
        .collect();
    assert_eq!(to_repr(&min_heap), "[1,4,9]");
    assert_eq!(to_repr(&BinaryHeap::<i32>::new()), "[]");
}

#[derive(Clone)]
struct Stack(Vec<i32>);

impl ContainerAdapter for Stack {
    type Item = i32;

    fn pop_next(&mut self) -> Option<i32> {
        self.0.pop()
    }
}

#[test]
fn custom_adapters_are_drained_from_a_copy() {
    let stack = Stack(vec![1, 2, 3]);
    assert_eq!(to_repr(&Drained(&stack)), "[3,2,1]");
    assert_eq!(stack.0, vec![1, 2, 3]);
}

#[test]
fn pointers_are_transparent() {
    let value = 5;
    let mut other = 'c';
    assert_eq!(to_repr(&&value), "5");
    assert_eq!(to_repr(&&mut other), "'c'");
    assert_eq!(to_repr(&Box::new("boxed")), r#""boxed""#);
    assert_eq!(to_repr(&Rc::new(vec![1])), "[1]");
    assert_eq!(to_repr(&Arc::new((1, 2))), "<1,2>");
}

struct Celsius(i32);

impl std::fmt::Display for Celsius {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}C", self.0)
    }
}

crate::native_repr!(Celsius);

#[test]
fn registered_types_use_display() {
    assert_eq!(to_repr(&Celsius(21)), "21C");
    assert_eq!(to_repr(&vec![Celsius(1), Celsius(-2)]), "[1C,-2C]");
}

struct Unwritable;

impl std::fmt::Display for Unwritable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("par")?;
        Err(std::fmt::Error)
    }
}

crate::native_repr!(Unwritable);

#[test]
fn failing_display_is_marked() {
    assert_eq!(to_repr(&Unwritable), format!("par{}", FAILED_MARKER));
    assert_eq!(to_repr(&vec![Unwritable]), "[par<?>");

    let broken = Unwritable;
    let x = 1;
    assert_eq!(debug_line!(broken, x), "[broken, x] : par<?> 1\n");
}

#[test]
fn display_adapter() {
    assert_eq!(format!("{}", repr(&(1, "a"))), r#"<1,"a">"#);
    assert_eq!(format!("<{}>", Repr(&'q')), "<'q'>");
}

#[test]
fn nested_values() {
    let mut graph = BTreeMap::new();
    graph.insert("a", vec![("b", 1.5), ("c", 2.0)]);
    graph.insert("b", vec![]);
    let queue: VecDeque<_> = vec![Some(1), None].into_iter().flatten().collect();

    let actual = format!("{}\n{}\n", repr(&graph), repr(&(queue, "q\n")));
    expect![[r#"
        {"a":[<"b",1.5>,<"c",2>],"b":[]}
        <[1],"q\n">
    "#]]
    .assert_eq(&actual);
}

#[test]
fn debug_line_format() {
    let x = 1;
    let y = 'a';
    assert_eq!(debug_line!(x, y), "[x, y] : 1 'a'\n");
    assert_eq!(debug_line!(), "[] :\n");
    assert_eq!(debug_line!(x,), "[x] : 1\n");

    let v = vec![1, 2];
    assert_eq!(debug_line!(v.len(), v), "[v.len(), v] : 2 [1,2]\n");
}

#[test]
fn debug_to_writer() {
    let mut out = Vec::new();
    let pair = (3, 4);
    debug_to!(out; pair, "a\"b").unwrap();
    debug_to!(out;).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "[pair, \"a\\\"b\"] : <3,4> \"a\\\"b\"\n[] :\n"
    );
}

#[test]
fn debug_writes_to_installed_stream() {
    let output = capture(|| {
        let x = 42;
        let words = vec!["hi"];
        debug!(x, words);
        debug!();
    });
    assert_eq!(output, "[x, words] : 42 [\"hi\"]\n[] :\n");
}

#[test]
fn disabled_debug_is_silent_and_lazy() {
    let mut evaluated = false;
    let output = capture(|| {
        set_enabled(false);
        debug!({
            evaluated = true;
            1
        });
        set_enabled(true);
    });
    assert_eq!(output, "");
    assert!(!evaluated);
}

#[test]
fn install_applies_config() {
    let output = capture(|| {
        install(&Config {
            stream: StreamKind::Null,
            enabled: true,
        });
        debug!(1);

        let replaced = set_debug_stream(StreamKind::Stderr);
        assert!(matches!(replaced, Stream::Null));
        install(&Config::default());
        assert!(is_enabled());
    });
    assert_eq!(output, "");
}

#[test]
fn shared_buffer_take_clears() {
    let mut buffer = SharedBuffer::new();
    std::io::Write::write_all(&mut buffer, b"abc").unwrap();
    assert_eq!(buffer.clone().take(), "abc");
    assert_eq!(buffer.contents(), "");
}

#[quickcheck]
fn bools_are_words(b: bool) -> bool {
    let text = to_repr(&b);
    text == "True" || text == "False"
}

#[quickcheck]
fn chars_are_single_quoted(c: char) -> bool {
    let text = to_repr(&c);
    let inner = &text[1..text.len() - 1];
    let quoted = text.starts_with('\'') && text.ends_with('\'');
    quoted
        && match escape_char(c) {
            Some(escape) => inner == escape && inner.len() == 2 && inner.starts_with('\\'),
            None => inner.chars().eq(std::iter::once(c)),
        }
}

#[quickcheck]
fn strings_escape_every_special_char(s: String) -> bool {
    unescape(&to_repr(&s)).as_deref() == Some(s.as_str())
}

#[quickcheck]
fn sequences_have_no_trailing_comma(xs: Vec<i64>) -> bool {
    let expected = xs
        .iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(",");
    to_repr(&xs) == format!("[{}]", expected)
}

#[quickcheck]
fn sets_use_braces(xs: BTreeSet<u16>) -> bool {
    let text = to_repr(&xs);
    text.starts_with('{')
        && text.ends_with('}')
        && !text.contains(",}")
        && text.matches(',').count() == xs.len().saturating_sub(1)
}
