mod common;

use std::sync::Arc;

use cartkit::cart::CartStore;
use cartkit::config::{Currency, Locale};
use cartkit::confirm::Decision;
use cartkit::storage::{CartBackend, FileBackend};
use cartkit::ui::clear::ClearWorkflow;
use cartkit::ui::format::CurrencyFormatter;
use cartkit::ui::messages::Messages;
use cartkit::ui::shell::{Shell, ShellControl};
use common::{Note, RecordingNotifier, ScriptedPort};
use tempfile::TempDir;

fn shell(
    store: &CartStore,
    answers: &[Decision],
    notifier: Arc<RecordingNotifier>,
) -> Shell<Vec<u8>> {
    let messages = Messages::new(Locale::Vi);
    let workflow = ClearWorkflow::new(
        store.clone(),
        ScriptedPort::new(answers),
        notifier.clone(),
        messages,
    );
    Shell::new(
        store.clone(),
        workflow,
        notifier,
        CurrencyFormatter::new(Currency::Vnd),
        messages,
        Vec::new(),
    )
}

fn output(shell: &Shell<Vec<u8>>) -> String {
    String::from_utf8_lossy(shell.output()).into_owned()
}

#[tokio::test]
async fn plus_minus_and_remove_buttons() {
    let store = CartStore::in_memory();
    let mut shell = shell(&store, &[], RecordingNotifier::new());

    shell.handle_line("add basa 50.000 Cá basa").await.unwrap();
    shell.handle_line("inc basa").await.unwrap();
    assert_eq!(store.items()[0].quantity, 2);
    assert!(output(&shell).contains("Tổng cộng: 100.000 ₫"));

    shell.handle_line("dec basa").await.unwrap();
    assert_eq!(store.total_price(), 50_000);

    shell.handle_line("rm basa").await.unwrap();
    assert!(store.is_empty());
    assert!(output(&shell).ends_with("Giỏ hàng hiện đang trống. Hãy thêm một vài loại cá tươi nhé!\n"));
}

#[tokio::test]
async fn unknown_id_is_reported_not_fatal() {
    let store = CartStore::in_memory();
    let mut shell = shell(&store, &[], RecordingNotifier::new());

    let control = shell.handle_line("dec nope").await.unwrap();
    assert_eq!(control, ShellControl::Continue);
    assert!(output(&shell).contains("Không có sản phẩm 'nope'"));
}

#[tokio::test]
async fn clear_goes_through_confirmation() {
    let store = common::three_item_store(common::memory());
    let mut shell = shell(&store, &[Decision::Cancelled, Decision::Confirmed], RecordingNotifier::new());

    shell.handle_line("clear").await.unwrap();
    assert_eq!(store.item_count(), 3);

    shell.handle_line("clear").await.unwrap();
    assert!(store.is_empty());
    assert!(output(&shell).contains("Đã xóa 3 sản phẩm."));
}

#[tokio::test]
async fn checkout_shows_placeholder_notice() {
    let store = common::three_item_store(common::memory());
    let notifier = RecordingNotifier::new();
    let mut shell = shell(&store, &[], notifier.clone());

    shell.handle_line("checkout").await.unwrap();
    assert_eq!(store.item_count(), 3);
    assert_eq!(
        notifier.notes.lock().as_slice(),
        &[Note::Info {
            title: "Thông báo".into(),
            message: "Chưa làm ạ!".into(),
        }]
    );
}

#[tokio::test]
async fn quit_stops_loop() {
    let store = CartStore::in_memory();
    let mut shell = shell(&store, &[], RecordingNotifier::new());
    assert_eq!(shell.handle_line("quit").await.unwrap(), ShellControl::Quit);
}

#[tokio::test]
async fn edits_are_flushed_to_file_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cart.json");
    let store = CartStore::new(Arc::new(FileBackend::new(&path)));
    let mut shell = shell(&store, &[], RecordingNotifier::new());

    shell.handle_line("add salmon 320000 Cá hồi").await.unwrap();
    shell.handle_line("+ salmon").await.unwrap();

    let reopened = FileBackend::new(&path);
    let items = reopened.load().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 2);

    let restored = CartStore::new(Arc::new(reopened));
    assert_eq!(restored.restore().await.unwrap(), 1);
    assert_eq!(restored.total_price(), 640_000);
}
