use person_manager::{
    PersonField, Session, SubmitOutcome, ValidationKind, session::NATIONAL_ID_MAX_LEN,
};

use api_fake::{FakeApi, person};

fn ids(persons: &[person_manager::Person]) -> Vec<u32> {
    persons.iter().map(|p| p.id).collect()
}

fn fill_form(session: &mut Session<FakeApi>) {
    let form = session.form_mut();
    form.set(PersonField::Name, "Joana");
    form.set(PersonField::Age, "27");
    form.set(PersonField::MaritalStatus, "single");
    form.set(PersonField::NationalId, "11122233344");
    form.set(PersonField::City, "Curitiba");
    form.set(PersonField::State, "PR");
}

#[tokio::test]
async fn refresh_loads_every_record() {
    let api = FakeApi::with_persons(7);
    let mut session = Session::new(api.clone(), 5);

    assert!(session.refresh().await);
    assert_eq!(session.store().len(), 7);
    assert_eq!(ids(session.visible()), vec![1, 2, 3, 4, 5]);
    assert_eq!(api.list_calls(), 1);
}

#[tokio::test]
async fn failed_refresh_keeps_previous_list() {
    let api = FakeApi::with_persons(3);
    let mut session = Session::new(api.clone(), 5);
    session.refresh().await;

    api.insert_remote(person(10));
    api.fail_list(true);

    assert!(!session.refresh().await);
    assert_eq!(ids(session.store().persons()), vec![1, 2, 3]);
}

#[tokio::test]
async fn three_records_on_single_page() {
    let mut session = Session::new(FakeApi::with_persons(3), 5);
    session.refresh().await;

    assert_eq!(ids(session.visible()), vec![1, 2, 3]);
    assert!(!session.has_next_page());
    assert!(!session.has_prev_page());
    assert!(!session.next_page());
    assert!(!session.prev_page());
    assert_eq!(session.pagination().page(), 1);
}

#[tokio::test]
async fn second_page_of_twelve_records() {
    let mut session = Session::new(FakeApi::with_persons(12), 5);
    session.refresh().await;

    assert!(session.next_page());
    assert_eq!(session.pagination().page(), 2);
    assert_eq!(ids(session.visible()), vec![6, 7, 8, 9, 10]);
    assert!(session.has_next_page());
    assert!(session.has_prev_page());
    assert_eq!(session.page_count(), 3);

    assert!(session.next_page());
    assert!(!session.next_page());
    assert_eq!(ids(session.visible()), vec![11, 12]);
}

#[tokio::test]
async fn missing_field_does_not_call_create() {
    for field in PersonField::ALL {
        let api = FakeApi::with_persons(1);
        let mut session = Session::new(api.clone(), 5);
        session.open_dialog();
        fill_form(&mut session);
        session.form_mut().set(field, "");

        match session.submit_form().await {
            SubmitOutcome::Invalid(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors.for_field(field).unwrap().kind, ValidationKind::Missing);
            }
            other => panic!("expected validation failure for {field:?}, got {other:?}"),
        }

        assert!(api.created().is_empty());
        assert!(session.is_dialog_open());
        assert_eq!(session.form().errors().len(), 1);
    }
}

#[tokio::test]
async fn long_national_id_is_rejected_before_sending() {
    let api = FakeApi::new();
    let mut session = Session::new(api.clone(), 5);
    session.open_dialog();
    fill_form(&mut session);
    session
        .form_mut()
        .set(PersonField::NationalId, "9".repeat(NATIONAL_ID_MAX_LEN + 1));

    let outcome = session.submit_form().await;

    assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
    assert!(api.created().is_empty());
    let error = session
        .form()
        .errors()
        .for_field(PersonField::NationalId)
        .unwrap();
    assert_eq!(error.message(), "National ID must be at most 11 characters");
    assert_eq!(session.form().value(PersonField::Name), "Joana");
}

#[tokio::test]
async fn non_numeric_age_is_rejected_before_sending() {
    let api = FakeApi::new();
    let mut session = Session::new(api.clone(), 5);
    fill_form(&mut session);
    session.form_mut().set(PersonField::Age, "twenty");

    assert!(matches!(
        session.submit_form().await,
        SubmitOutcome::Invalid(_)
    ));
    assert!(api.created().is_empty());
}

#[tokio::test]
async fn successful_create_reloads_and_resets_form() {
    let api = FakeApi::with_persons(2);
    let mut session = Session::new(api.clone(), 5);
    session.refresh().await;

    // Another client added a record meanwhile; the reload must pick it up.
    api.insert_remote(person(40));

    session.open_dialog();
    fill_form(&mut session);
    let outcome = session.submit_form().await;

    let created = match outcome {
        SubmitOutcome::Created(Some(created)) => created,
        other => panic!("expected create, got {other:?}"),
    };
    assert_eq!(created.name, "Joana");
    assert_eq!(api.created().len(), 1);
    assert_eq!(api.list_calls(), 2);
    assert_eq!(session.store().persons(), api.remote_persons().as_slice());
    assert!(session.store().contains(40));
    assert!(session.store().contains(created.id));
    assert!(session.form().is_empty());
    assert!(session.form().errors().is_empty());
    assert!(!session.is_dialog_open());
}

#[tokio::test]
async fn failed_create_keeps_form_and_dialog() {
    let api = FakeApi::with_persons(2);
    let mut session = Session::new(api.clone(), 5);
    session.refresh().await;
    api.fail_create(true);

    session.open_dialog();
    fill_form(&mut session);

    assert_eq!(session.submit_form().await, SubmitOutcome::Failed);
    assert_eq!(api.created().len(), 1);
    assert_eq!(api.list_calls(), 1);
    assert!(session.is_dialog_open());
    assert_eq!(session.form().value(PersonField::City), "Curitiba");
    assert_eq!(session.store().len(), 2);
}

#[tokio::test]
async fn create_with_failing_reload_still_closes_dialog() {
    let api = FakeApi::with_persons(2);
    let mut session = Session::new(api.clone(), 5);
    session.refresh().await;
    api.fail_list(true);

    session.open_dialog();
    fill_form(&mut session);

    assert!(matches!(
        session.submit_form().await,
        SubmitOutcome::Created(_)
    ));
    assert!(!session.is_dialog_open());
    assert!(session.form().is_empty());
    assert_eq!(ids(session.store().persons()), vec![1, 2]);
}

#[tokio::test]
async fn delete_removes_locally_without_reload() {
    let api = FakeApi::with_persons(4);
    let mut session = Session::new(api.clone(), 5);
    session.refresh().await;

    assert!(session.delete(3).await);

    assert!(!session.store().contains(3));
    assert_eq!(ids(session.store().persons()), vec![1, 2, 4]);
    assert_eq!(api.deleted(), vec![3]);
    assert_eq!(api.list_calls(), 1);
}

#[tokio::test]
async fn failed_delete_keeps_row() {
    let api = FakeApi::with_persons(4);
    let mut session = Session::new(api.clone(), 5);
    session.refresh().await;
    api.fail_delete(true);

    assert!(!session.delete(2).await);

    assert!(session.store().contains(2));
    assert_eq!(session.store().len(), 4);
    assert_eq!(api.deleted(), vec![2]);
}

#[tokio::test]
async fn deleting_last_row_of_last_page_moves_back() {
    let api = FakeApi::with_persons(6);
    let mut session = Session::new(api.clone(), 5);
    session.refresh().await;
    session.next_page();
    assert_eq!(ids(session.visible()), vec![6]);

    session.delete(6).await;

    assert_eq!(session.pagination().page(), 1);
    assert_eq!(ids(session.visible()), vec![1, 2, 3, 4, 5]);
    assert!(!session.has_next_page());
}

#[tokio::test]
async fn refresh_clamps_page_when_list_shrinks() {
    let api = FakeApi::with_persons(11);
    let mut session = Session::new(api.clone(), 5);
    session.refresh().await;
    session.next_page();
    session.next_page();
    assert_eq!(session.pagination().page(), 3);

    for id in 4..=11 {
        api.delete_remote(id);
    }
    session.refresh().await;

    assert_eq!(session.pagination().page(), 1);
    assert_eq!(ids(session.visible()), vec![1, 2, 3]);
}

#[tokio::test]
async fn closing_dialog_keeps_typed_values() {
    let mut session = Session::new(FakeApi::new(), 5);
    session.open_dialog();
    session.form_mut().set(PersonField::Name, "Rafael");
    session.close_dialog();

    assert!(!session.is_dialog_open());
    session.open_dialog();
    assert_eq!(session.form().value(PersonField::Name), "Rafael");
}

#[tokio::test]
async fn closing_dialog_drops_validation_messages() {
    let mut session = Session::new(FakeApi::new(), 5);
    session.open_dialog();
    session.form_mut().set(PersonField::Name, "Rafael");
    assert!(matches!(
        session.submit_form().await,
        SubmitOutcome::Invalid(_)
    ));
    assert!(!session.form().errors().is_empty());

    session.close_dialog();
    session.open_dialog();

    assert!(session.form().errors().is_empty());
    assert_eq!(session.form().value(PersonField::Name), "Rafael");
}
