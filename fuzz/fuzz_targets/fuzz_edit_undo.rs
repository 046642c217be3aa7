#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use revbuf::Editor;

#[derive(Debug, Arbitrary)]
enum Op {
    Append(String),
    Insert(u16, String),
    Replace(u16, u16, String),
    Delete(u16, u16),
    DeleteCharAt(u16),
    SetCharAt(u16, char),
    SetLength(u8),
    AppendCodePoint(u32),
    Reverse,
    Undo,
}

#[derive(Debug, Arbitrary)]
struct Session {
    initial: String,
    ops: Vec<Op>,
}

fuzz_target!(|session: Session| {
    let mut editor = Editor::from_text(&session.initial);
    // Content before each live history entry, oldest first.
    let mut snapshots: Vec<String> = Vec::new();

    for op in session.ops.iter().take(256) {
        let before = editor.to_string();
        let depth = editor.history_depth();
        // Raw positions go in unreduced so out-of-range calls get exercised.
        let recorded = match op {
            Op::Append(s) => {
                editor.append(s.as_str());
                true
            }
            Op::Insert(at, s) => editor.insert(usize::from(*at), s.as_str()).is_ok(),
            Op::Replace(a, b, s) => editor
                .replace(usize::from(*a), usize::from(*b), s.as_str())
                .is_ok(),
            Op::Delete(a, b) => editor.delete(usize::from(*a), usize::from(*b)).is_ok(),
            Op::DeleteCharAt(at) => editor.delete_char_at(usize::from(*at)).is_ok(),
            Op::SetCharAt(at, c) => editor.set_char_at(usize::from(*at), *c).is_ok(),
            Op::SetLength(n) => {
                editor.set_length(usize::from(*n));
                true
            }
            Op::AppendCodePoint(cp) => editor.append_code_point(*cp).is_ok(),
            Op::Reverse => {
                editor.reverse();
                true
            }
            Op::Undo => {
                editor.undo();
                if let Some(expected) = snapshots.pop() {
                    assert_eq!(editor.to_string(), expected, "undo did not restore content");
                } else {
                    assert_eq!(editor.to_string(), before, "undo on empty history changed content");
                }
                false
            }
        };

        if recorded {
            assert_eq!(editor.history_depth(), depth + 1);
            snapshots.push(before);
        } else if !matches!(op, Op::Undo) {
            assert_eq!(editor.to_string(), before, "rejected call changed content");
            assert_eq!(editor.history_depth(), depth, "rejected call changed history");
        }
    }

    while let Some(expected) = snapshots.pop() {
        editor.undo();
        assert_eq!(editor.to_string(), expected);
    }
    assert_eq!(editor.to_string(), session.initial);
    assert!(!editor.can_undo());
});
