//! The assertion macros as seen from a consuming crate.

use cairn_error::{ContextKey, ErrorKind, PlatformCode, Result, check, check_platform};

fn parse_magic(magic: u32) -> Result<u32> {
    check!(ErrorKind::Data, magic == 0x4d41_4943);
    Ok(magic)
}

#[test]
fn macro_raises_with_source_text() {
    let err = parse_magic(0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Data);
    assert_eq!(err.message(), "Assert failed: magic == 0x4d41_4943");
}

#[test]
fn macro_is_silent_on_success() {
    assert_eq!(parse_magic(0x4d41_4943).unwrap(), 0x4d41_4943);
}

fn spawn_worker(ok: bool) -> Result<()> {
    check_platform!(ok);
    Ok(())
}

#[test]
fn platform_macro_attaches_os_code() {
    let err = spawn_worker(false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Platform);
    assert!(err.is(ErrorKind::System));
    assert_eq!(err.message(), "Assert failed: ok");
    assert!(err.context_value::<PlatformCode>().is_some());
}

fn load_chunk(len: usize, max: usize) -> Result<()> {
    check!(ErrorKind::Data, len <= max, "chunk of {len} exceeds {max}");
    Ok(())
}

#[test]
fn macro_accepts_formatted_description() {
    let err = load_chunk(10, 4).unwrap_err();
    assert_eq!(err.message(), "Assert failed: chunk of 10 exceeds 4");
}

#[test]
fn function_form_uses_supplied_description() {
    let err = check(ErrorKind::Runtime, false, "x>0").unwrap_err();
    assert_eq!(err.message(), "Assert failed: x>0");
    assert!(check(ErrorKind::Runtime, true, "x>0").is_ok());
}

struct Backend;
impl ContextKey for Backend {
    const NAME: &'static str = "backend";
    type Value = String;
}

#[test]
fn raised_errors_take_further_context() {
    let err = check_platform(false, "bind socket")
        .unwrap_err()
        .with_context::<Backend>("epoll".to_string());
    assert!(err.context_value::<PlatformCode>().is_some());
    assert_eq!(err.context_value::<Backend>(), Some("epoll".to_string()));
}
