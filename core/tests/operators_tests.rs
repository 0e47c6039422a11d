// tests/operators_tests.rs
mod common;

use common::*;
use salvage::{elvis, elvis_with, first_non_null, safe, safe_call, supplier, MissingValue, Supplier};
use serial_test::serial;

#[test]
#[serial]
fn first_non_null_can_handle_null_dereferences_correctly() {
  setup_tracing();
  reset_counters();
  let expected_value = "yay!";

  let retval = first_non_null!(
    || count_and_fail::<&str>("oops!"),
    || count_and_fail("oh no, not again!"),
    move || count_and_return(Some(expected_value)),
    || count_and_fail("oh no, not again 2!"),
    || count_and_fail("oh no, not again 3!"),
  )
  .unwrap();

  // 3rd operation has a value
  assert_eq!(retval, Some(expected_value));
  assert_eq!(invocations(), 3);
}

#[test]
#[serial]
fn first_non_null_can_handle_null_values_correctly() {
  setup_tracing();
  reset_counters();
  let expected_value = "yay!";

  let retval = first_non_null!(
    || count_and_return::<&str>(None),
    move || count_and_return(Some(expected_value)),
    || count_and_return(None),
    || count_and_return(None),
  )
  .unwrap();

  // 2nd operation has a value
  assert_eq!(retval, Some(expected_value));
  assert_eq!(invocations(), 2);
}

#[test]
#[serial]
fn first_non_null_exhausts_fallbacks_and_returns_none() {
  setup_tracing();
  reset_counters();
  let fallbacks: Vec<Supplier<u32>> = vec![
    supplier(|| count_and_fail("second")),
    supplier(|| count_and_return(None)),
  ];

  let retval = first_non_null(|| count_and_return(None), fallbacks).unwrap();

  assert_eq!(retval, None);
  assert_eq!(invocations(), 3);
}

#[test]
#[serial]
fn first_non_null_stops_on_other_failures() {
  setup_tracing();
  reset_counters();
  let result = first_non_null!(
    || count_and_return::<u32>(None),
    || {
      count_and_return::<u32>(None)?;
      Err(TestError::Io("disk".to_string()).into())
    },
    || count_and_return(Some(1)),
  );

  assert_eq!(
    result.unwrap_err().downcast_ref::<TestError>(),
    Some(&TestError::Io("disk".to_string()))
  );
  assert_eq!(invocations(), 2);
}

#[test]
fn first_non_null_without_fallbacks() {
  setup_tracing();
  assert_eq!(first_non_null!(|| Ok(Some('x'))).unwrap(), Some('x'));
  assert_eq!(first_non_null!(|| Err::<Option<char>, _>(missing("x"))).unwrap(), None);
}

#[test]
fn safe_calls_return_value_when_possible() {
  setup_tracing();
  let pojo = Pojo::default();
  let existing_value = read_c(pojo.clone()).unwrap();
  assert!(existing_value.is_some());
  assert_eq!(safe_call(move || read_c(pojo)).unwrap(), existing_value);
}

#[test]
fn safe_calls_return_none_when_value_does_not_exist() {
  setup_tracing();
  let mut pojo = Pojo::default();
  let snapshot = pojo.clone();
  assert!(safe_call(move || read_c(snapshot)).unwrap().is_some());

  pojo.a.as_mut().unwrap().b.as_mut().unwrap().c = None;
  let snapshot = pojo.clone();
  assert_eq!(safe_call(move || read_c(snapshot)).unwrap(), None);

  pojo.a.as_mut().unwrap().b = None;
  let snapshot = pojo.clone();
  assert_eq!(safe_call(move || read_c(snapshot)).unwrap(), None);

  pojo.a = None;
  assert_eq!(safe(move || read_c(pojo)).unwrap(), None);

  assert_eq!(safe_call(|| Ok(None::<String>)).unwrap(), None);
}

#[test]
fn safe_call_propagates_other_failures() {
  setup_tracing();
  let result = safe_call(|| Err::<Option<u8>, _>(TestError::IllegalState("x".to_string()).into()));
  assert!(result.unwrap_err().downcast_ref::<TestError>().is_some());
}

#[test]
fn elvis_returns_default_value_when_null_is_encountered() {
  setup_tracing();
  let expected_retval = "RETVAL".to_string();
  let mut pojo = Pojo::default();
  pojo.a.as_mut().unwrap().b.as_mut().unwrap().c = None;

  assert_eq!(elvis(move || read_c(pojo), expected_retval.clone()).unwrap(), expected_retval);
  assert_eq!(elvis(|| Ok(None), expected_retval.clone()).unwrap(), expected_retval);
  assert_eq!(
    elvis(|| Err(MissingValue::new("a.b").into()), expected_retval.clone()).unwrap(),
    expected_retval
  );
  assert_eq!(elvis(|| Ok(Some("present".to_string())), expected_retval).unwrap(), "present");
}

#[test]
#[serial]
fn elvis_with_only_builds_default_when_needed() {
  setup_tracing();
  reset_counters();

  let present = elvis_with(|| Ok(Some(1)), || count_and_return(Some(2)).map(|v| v.unwrap_or_default())).unwrap();
  assert_eq!(present, 1);
  assert_eq!(invocations(), 0);

  let fallback = elvis_with(|| Err(missing("a")), || count_and_return(Some(2)).map(|v| v.unwrap_or_default())).unwrap();
  assert_eq!(fallback, 2);
  assert_eq!(invocations(), 1);
}
