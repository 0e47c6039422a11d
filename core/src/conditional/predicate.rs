// salvage/src/conditional/predicate.rs

//! The canonical "is blank" test used by `equals_to_blank`.

use std::any::Any;
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// Returns true for an absent value, or for text that is empty or consists only
/// of whitespace. Any other value, text or not, is not blank.
///
/// Text is recognised by downcasting, so this works for any `T`: `String`,
/// `&'static str`, `Box<str>`, `Arc<str>`, `Rc<str>` and `Cow<'static, str>`
/// are inspected. Anything else (numbers, booleans, structs, other text
/// wrappers) is never blank when present.
pub fn is_blank<T: Any>(value: Option<&T>) -> bool {
  let Some(value) = value else {
    return true;
  };
  match as_text(value) {
    Some(text) => text.trim().is_empty(),
    None => false,
  }
}

fn as_text<T: Any>(value: &T) -> Option<&str> {
  let any = value as &dyn Any;
  if let Some(s) = any.downcast_ref::<String>() {
    return Some(s.as_str());
  }
  if let Some(s) = any.downcast_ref::<&'static str>() {
    return Some(*s);
  }
  if let Some(s) = any.downcast_ref::<Box<str>>() {
    return Some(&**s);
  }
  if let Some(s) = any.downcast_ref::<Arc<str>>() {
    return Some(&**s);
  }
  if let Some(s) = any.downcast_ref::<Rc<str>>() {
    return Some(&**s);
  }
  if let Some(s) = any.downcast_ref::<Cow<'static, str>>() {
    return Some(&**s);
  }
  None
}
