use mola_exercises::linked_list::SinglyLinkedList;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mola_exercises=info,linked_list_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut list = SinglyLinkedList::new();
    for value in [1, 2, 3, 4] {
        list.append(value);
    }
    info!(len = list.len(), cyclic = list.detect_cycle(), "list built");

    if !list.is_empty() {
        println!("Nodes of singly linked list: ");
    }
    println!("{list}");
}
