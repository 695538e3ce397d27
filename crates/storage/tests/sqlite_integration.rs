use journey_core::model::{ChatLog, JourneyProgress, Language, LessonProgress, Message, Role};
use journey_core::time::fixed_now;
use storage::repository::{ChatRecord, ChatRepository, JourneyRecord, JourneyRepository};
use storage::sqlite::SqliteRepository;

fn build_journey() -> JourneyProgress {
    let mut journey = JourneyProgress::thirty_day();
    journey.complete_day(1).unwrap();
    journey.complete_day(2).unwrap();
    journey
        .record_lesson_progress(3, LessonProgress::new(5, 2, 1).unwrap())
        .unwrap();
    journey
}

#[tokio::test]
async fn sqlite_roundtrip_restores_journey_progress() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_journey?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let journey = build_journey();
    repo.save_journey(&JourneyRecord::from_journey(&journey))
        .await
        .unwrap();

    let restored = repo
        .load_journey()
        .await
        .expect("load")
        .expect("record present")
        .into_journey()
        .expect("valid record");

    assert_eq!(restored, journey);
    assert_eq!(restored.completed_days(), &[1, 2]);
    assert_eq!(restored.lesson_progress(3).unwrap().viewed_cards(), 2);
}

#[tokio::test]
async fn sqlite_save_is_an_upsert() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_upsert?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let mut journey = build_journey();
    repo.save_journey(&JourneyRecord::from_journey(&journey))
        .await
        .unwrap();

    journey.complete_day(3).unwrap();
    repo.save_journey(&JourneyRecord::from_journey(&journey))
        .await
        .unwrap();

    let restored = repo
        .load_journey()
        .await
        .unwrap()
        .unwrap()
        .into_journey()
        .unwrap();
    assert_eq!(restored.completed_days(), &[1, 2, 3]);
    assert_eq!(restored.current_day(), 4);
    assert!(restored.lesson_progress(3).is_none());
}

#[tokio::test]
async fn sqlite_roundtrip_restores_chat_state() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_chat?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let mut log = ChatLog::new();
    log.set_language(Language::Fr);
    log.push(Message::new(Role::User, "bonjour", fixed_now()));
    log.push(Message::new(Role::Assistant, "salut", fixed_now()));

    repo.save_chat(&ChatRecord::from_log(&log)).await.unwrap();

    let restored = repo
        .load_chat()
        .await
        .expect("load")
        .expect("record present")
        .into_log()
        .expect("valid record");

    assert_eq!(restored, log);
    assert_eq!(restored.language(), Language::Fr);
}

#[tokio::test]
async fn empty_database_loads_nothing() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_empty?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert!(repo.load_journey().await.unwrap().is_none());
    assert!(repo.load_chat().await.unwrap().is_none());
}
