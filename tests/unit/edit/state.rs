use super::*;

#[test]
fn starts_idle_showing_committed() {
    let buf = EditBuffer::new("42");
    assert_eq!(buf.state(), EditState::Idle);
    assert_eq!(buf.display(), "42");
}

#[test]
fn keystrokes_update_display_without_committing() {
    let mut buf = EditBuffer::new("42");
    buf.input("4");
    buf.input("");
    buf.input("-");
    assert_eq!(buf.state(), EditState::Editing);
    assert_eq!(buf.display(), "-");
    assert_eq!(buf.committed(), "42");
}

#[test]
fn sync_is_ignored_while_editing() {
    let mut buf = EditBuffer::new("42");
    buf.input("1");
    buf.sync("99");
    assert_eq!(buf.display(), "1");
    assert_eq!(buf.committed(), "42");
}

#[test]
fn sync_applies_while_idle() {
    let mut buf = EditBuffer::new("42");
    buf.sync("99");
    assert_eq!(buf.display(), "99");
    assert_eq!(buf.committed(), "99");
}

#[test]
fn valid_blur_commits_and_settles() {
    let mut buf = EditBuffer::new("42");
    buf.input("7");
    let committed = buf.blur(|b| (!b.is_empty()).then(|| b.to_string()));
    assert_eq!(committed.as_deref(), Some("7"));
    assert_eq!(buf.state(), EditState::Committing);
    buf.settle();
    assert_eq!(buf.state(), EditState::Idle);
    assert_eq!(buf.display(), "7");
}

#[test]
fn invalid_blur_reverts_to_committed_not_a_default() {
    let mut buf = EditBuffer::new("42");
    buf.input("");
    let committed = buf.blur(|b| (!b.is_empty()).then(|| b.to_string()));
    assert_eq!(committed, None);
    assert_eq!(buf.state(), EditState::Idle);
    assert_eq!(buf.display(), "42");
}
