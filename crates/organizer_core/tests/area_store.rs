use organizer_core::{
    open_db_in_memory, Area, AreaService, CreateArea, DeleteArea, FindArea, ParentChange,
    RepoError, RowStatus, ServiceError, SqliteAreaRepository, UpdateArea, ValidationError,
    ROOT_PARENT_ID,
};
use rusqlite::Connection;

fn setup() -> Connection {
    open_db_in_memory().unwrap()
}

fn service(conn: &Connection) -> AreaService<SqliteAreaRepository<'_>> {
    AreaService::new(SqliteAreaRepository::try_new(conn).unwrap())
}

fn new_area(uid: &str, parent_id: Option<i32>) -> CreateArea {
    CreateArea {
        uid: uid.to_string(),
        creator_id: 1,
        name: format!("{uid} name"),
        description: format!("{uid} description"),
        parent_id,
    }
}

fn area_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM area;", [], |row| row.get(0))
        .unwrap()
}

fn ids(areas: &[Area]) -> Vec<i32> {
    areas.iter().map(|area| area.id).collect()
}

#[test]
fn create_returns_stored_row_with_store_assigned_fields() {
    let conn = setup();
    let service = service(&conn);

    let input = new_area("work", None);
    let area = service.create(&input).unwrap();

    assert!(area.id > 0);
    assert!(area.created_ts > 0);
    assert!(area.updated_ts > 0);
    assert_eq!(area.row_status, RowStatus::Normal);
    assert_eq!(area.uid, input.uid);
    assert_eq!(area.creator_id, input.creator_id);
    assert_eq!(area.name, input.name);
    assert_eq!(area.description, input.description);
    assert_eq!(area.parent_id, None);

    let loaded = service.get(&FindArea::by_id(area.id)).unwrap().unwrap();
    assert_eq!(loaded, area);
}

#[test]
fn create_with_parent_decodes_parent_reference() {
    let conn = setup();
    let service = service(&conn);

    let root = service.create(&new_area("root", None)).unwrap();
    let child = service.create(&new_area("child", Some(root.id))).unwrap();

    assert_eq!(child.parent_id, Some(root.id));
    let stored_parent: Option<i32> = conn
        .query_row("SELECT parent_id FROM area WHERE id = ?1;", [root.id], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(stored_parent, None);
}

#[test]
fn create_rejects_invalid_uid_without_touching_store() {
    let conn = setup();
    let service = service(&conn);

    let err = service.create(&new_area("not valid!", None)).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::InvalidUid(ref uid)) if uid == "not valid!"
    ));
    assert_eq!(area_count(&conn), 0);
}

#[test]
fn create_rejects_non_positive_parent_without_touching_store() {
    let conn = setup();
    let service = service(&conn);

    for parent_id in [ROOT_PARENT_ID, -4] {
        let err = service
            .create(&new_area("misparented", Some(parent_id)))
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::InvalidParentId(id)) if id == parent_id
        ));
    }
    assert_eq!(area_count(&conn), 0);
}

#[test]
fn duplicate_uid_surfaces_store_constraint_error() {
    let conn = setup();
    let service = service(&conn);

    service.create(&new_area("dup", None)).unwrap();
    let err = service.create(&new_area("dup", None)).unwrap_err();
    match err {
        ServiceError::Store(store_err) => assert!(store_err.is_constraint_violation()),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(area_count(&conn), 1);
}

#[test]
fn list_without_filter_returns_every_row_newest_first() {
    let conn = setup();
    let service = service(&conn);

    let first = service.create(&new_area("first", None)).unwrap();
    let second = service.create(&new_area("second", Some(first.id))).unwrap();
    let third = service.create(&new_area("third", None)).unwrap();

    let listed = service.list(&FindArea::default()).unwrap();
    assert_eq!(ids(&listed), vec![third.id, second.id, first.id]);
}

#[test]
fn list_orders_by_creation_time_before_id() {
    let conn = setup();
    let service = service(&conn);

    let older_id = service.create(&new_area("a", None)).unwrap();
    let newer_id = service.create(&new_area("b", None)).unwrap();
    conn.execute(
        "UPDATE area SET created_ts = created_ts + 100 WHERE id = ?1;",
        [older_id.id],
    )
    .unwrap();

    let listed = service.list(&FindArea::default()).unwrap();
    assert_eq!(ids(&listed), vec![older_id.id, newer_id.id]);
    assert!(listed[0].created_ts > listed[1].created_ts);
}

#[test]
fn list_on_empty_store_returns_empty_vec() {
    let conn = setup();
    let service = service(&conn);

    assert!(service.list(&FindArea::default()).unwrap().is_empty());
    assert_eq!(service.get(&FindArea::by_uid("missing")).unwrap(), None);
}

#[test]
fn list_applies_every_present_filter() {
    let conn = setup();
    let service = service(&conn);

    let a = service.create(&new_area("alpha", None)).unwrap();
    let b = service
        .create(&CreateArea {
            creator_id: 2,
            ..new_area("beta", None)
        })
        .unwrap();
    let c = service.create(&new_area("gamma", Some(a.id))).unwrap();
    service
        .update(&UpdateArea {
            row_status: Some(RowStatus::Archived),
            ..UpdateArea::new(c.id)
        })
        .unwrap();

    let by_uid = service.list(&FindArea::by_uid("beta")).unwrap();
    assert_eq!(ids(&by_uid), vec![b.id]);

    let by_id_list = service
        .list(&FindArea {
            id_list: vec![a.id, c.id],
            ..FindArea::default()
        })
        .unwrap();
    assert_eq!(ids(&by_id_list), vec![c.id, a.id]);

    let by_uid_list = service
        .list(&FindArea {
            uid_list: vec!["alpha".to_string(), "beta".to_string(), "zeta".to_string()],
            ..FindArea::default()
        })
        .unwrap();
    assert_eq!(ids(&by_uid_list), vec![b.id, a.id]);

    let by_creator = service
        .list(&FindArea {
            creator_id: Some(1),
            ..FindArea::default()
        })
        .unwrap();
    assert_eq!(ids(&by_creator), vec![c.id, a.id]);

    let archived = service
        .list(&FindArea {
            row_status: Some(RowStatus::Archived),
            ..FindArea::default()
        })
        .unwrap();
    assert_eq!(ids(&archived), vec![c.id]);

    let combined = service
        .list(&FindArea {
            creator_id: Some(1),
            row_status: Some(RowStatus::Normal),
            ..FindArea::default()
        })
        .unwrap();
    assert_eq!(ids(&combined), vec![a.id]);

    let no_match = service
        .list(&FindArea {
            uid: Some("alpha".to_string()),
            creator_id: Some(2),
            ..FindArea::default()
        })
        .unwrap();
    assert!(no_match.is_empty());
}

#[test]
fn empty_id_and_uid_lists_are_ignored() {
    let conn = setup();
    let service = service(&conn);

    service.create(&new_area("one", None)).unwrap();
    service.create(&new_area("two", None)).unwrap();

    let listed = service
        .list(&FindArea {
            id_list: Vec::new(),
            uid_list: Vec::new(),
            ..FindArea::default()
        })
        .unwrap();
    assert_eq!(listed.len(), 2);
}

#[test]
fn root_filter_differs_from_no_parent_filter() {
    let conn = setup();
    let service = service(&conn);

    let root = service.create(&new_area("root", None)).unwrap();
    let child = service.create(&new_area("child", Some(root.id))).unwrap();
    let grandchild = service
        .create(&new_area("grandchild", Some(child.id)))
        .unwrap();

    let roots = service.list(&FindArea::roots()).unwrap();
    assert_eq!(ids(&roots), vec![root.id]);
    let explicit_roots = service
        .list(&FindArea {
            parent_id: Some(ROOT_PARENT_ID),
            ..FindArea::default()
        })
        .unwrap();
    assert_eq!(roots, explicit_roots);

    let unfiltered = service.list(&FindArea::default()).unwrap();
    assert_eq!(ids(&unfiltered), vec![grandchild.id, child.id, root.id]);

    let children = service.list(&FindArea::children_of(root.id)).unwrap();
    assert_eq!(ids(&children), vec![child.id]);
}

#[test]
fn limit_and_offset_paginate_in_listing_order() {
    let conn = setup();
    let service = service(&conn);

    let created: Vec<Area> = ["p1", "p2", "p3", "p4"]
        .into_iter()
        .map(|uid| service.create(&new_area(uid, None)).unwrap())
        .collect();

    let first_page = service
        .list(&FindArea {
            limit: Some(2),
            ..FindArea::default()
        })
        .unwrap();
    assert_eq!(ids(&first_page), vec![created[3].id, created[2].id]);

    let second_page = service
        .list(&FindArea {
            limit: Some(2),
            offset: Some(2),
            ..FindArea::default()
        })
        .unwrap();
    assert_eq!(ids(&second_page), vec![created[1].id, created[0].id]);

    let offset_only = service
        .list(&FindArea {
            offset: Some(3),
            ..FindArea::default()
        })
        .unwrap();
    assert_eq!(ids(&offset_only), vec![created[0].id]);
}

#[test]
fn update_with_only_name_changes_name_and_timestamp() {
    let conn = setup();
    let service = service(&conn);

    let parent = service.create(&new_area("parent", None)).unwrap();
    let before = service
        .create(&new_area("target", Some(parent.id)))
        .unwrap();

    service
        .update(&UpdateArea {
            name: Some("renamed".to_string()),
            updated_ts: Some(before.updated_ts + 60),
            ..UpdateArea::new(before.id)
        })
        .unwrap();

    let after = service.get(&FindArea::by_id(before.id)).unwrap().unwrap();
    assert_eq!(after.name, "renamed");
    assert_eq!(after.updated_ts, before.updated_ts + 60);
    assert_eq!(
        Area {
            name: before.name.clone(),
            updated_ts: before.updated_ts,
            ..after
        },
        before
    );
}

#[test]
fn update_without_fields_still_bumps_timestamp() {
    let conn = setup();
    let service = service(&conn);

    let before = service.create(&new_area("touch", None)).unwrap();
    conn.execute("UPDATE area SET updated_ts = 1 WHERE id = ?1;", [before.id])
        .unwrap();

    service.update(&UpdateArea::new(before.id)).unwrap();

    let after = service.get(&FindArea::by_id(before.id)).unwrap().unwrap();
    assert!(after.updated_ts >= before.updated_ts);
    assert_eq!(after.name, before.name);
}

#[test]
fn update_can_set_and_clear_parent() {
    let conn = setup();
    let service = service(&conn);

    let parent = service.create(&new_area("parent", None)).unwrap();
    let node = service.create(&new_area("node", None)).unwrap();

    service
        .update(&UpdateArea {
            parent: Some(ParentChange::Set(parent.id)),
            ..UpdateArea::new(node.id)
        })
        .unwrap();
    let moved = service.get(&FindArea::by_id(node.id)).unwrap().unwrap();
    assert_eq!(moved.parent_id, Some(parent.id));

    service
        .update(&UpdateArea {
            parent: Some(ParentChange::Clear),
            ..UpdateArea::new(node.id)
        })
        .unwrap();
    let cleared = service.get(&FindArea::by_id(node.id)).unwrap().unwrap();
    assert_eq!(cleared.parent_id, None);
}

#[test]
fn update_rejects_non_positive_parent_id() {
    let conn = setup();
    let service = service(&conn);

    let node = service.create(&new_area("node", None)).unwrap();
    let err = service
        .update(&UpdateArea {
            parent: Some(ParentChange::Set(0)),
            ..UpdateArea::new(node.id)
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::InvalidParentId(0))
    ));
}

#[test]
fn update_rejects_invalid_uid_and_leaves_row_unchanged() {
    let conn = setup();
    let service = service(&conn);

    let before = service.create(&new_area("stable", None)).unwrap();
    let err = service
        .update(&UpdateArea {
            uid: Some("bad uid".to_string()),
            name: Some("changed".to_string()),
            ..UpdateArea::new(before.id)
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::InvalidUid(_))
    ));

    let after = service.get(&FindArea::by_id(before.id)).unwrap().unwrap();
    assert_eq!(after, before);
}

#[test]
fn update_can_change_uid_and_archive_then_restore() {
    let conn = setup();
    let service = service(&conn);

    let area = service.create(&new_area("old-uid", None)).unwrap();
    service
        .update(&UpdateArea {
            uid: Some("new-uid".to_string()),
            row_status: Some(RowStatus::Archived),
            ..UpdateArea::new(area.id)
        })
        .unwrap();

    assert_eq!(service.get(&FindArea::by_uid("old-uid")).unwrap(), None);
    let archived = service.get(&FindArea::by_uid("new-uid")).unwrap().unwrap();
    assert_eq!(archived.row_status, RowStatus::Archived);

    service
        .update(&UpdateArea {
            row_status: Some(RowStatus::Normal),
            ..UpdateArea::new(area.id)
        })
        .unwrap();
    let restored = service.get(&FindArea::by_id(area.id)).unwrap().unwrap();
    assert_eq!(restored.row_status, RowStatus::Normal);
}

#[test]
fn update_of_missing_id_is_not_an_error() {
    let conn = setup();
    let service = service(&conn);

    service
        .update(&UpdateArea {
            name: Some("ghost".to_string()),
            ..UpdateArea::new(404)
        })
        .unwrap();
    assert_eq!(area_count(&conn), 0);
}

#[test]
fn delete_is_hard_and_idempotent() {
    let conn = setup();
    let service = service(&conn);

    let parent = service.create(&new_area("parent", None)).unwrap();
    let child = service.create(&new_area("child", Some(parent.id))).unwrap();

    service.delete(&DeleteArea { id: 999 }).unwrap();
    service.delete(&DeleteArea { id: parent.id }).unwrap();
    service.delete(&DeleteArea { id: parent.id }).unwrap();

    assert_eq!(service.get(&FindArea::by_id(parent.id)).unwrap(), None);
    let orphan = service.get(&FindArea::by_id(child.id)).unwrap().unwrap();
    assert_eq!(orphan.parent_id, Some(parent.id));
    assert_eq!(area_count(&conn), 1);
}

#[test]
fn injected_validator_replaces_default_shape() {
    let conn = setup();
    let repo = SqliteAreaRepository::try_new(&conn).unwrap();
    let service = AreaService::with_validator(repo, |uid: &str| uid.starts_with("area_"));

    service.create(&new_area("area_main", None)).unwrap();
    let err = service.create(&new_area("main", None)).unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[test]
fn corrupted_row_status_is_reported_as_invalid_data() {
    let conn = setup();
    let service = service(&conn);

    let area = service.create(&new_area("broken", None)).unwrap();
    conn.execute_batch("PRAGMA ignore_check_constraints = ON;")
        .unwrap();
    conn.execute(
        "UPDATE area SET row_status = 'DELETED' WHERE id = ?1;",
        [area.id],
    )
    .unwrap();

    let err = service.list(&FindArea::default()).unwrap_err();
    assert!(matches!(err, ServiceError::Store(RepoError::InvalidData(_))));
}
