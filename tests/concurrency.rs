//! Slow requests must not hold up anything else.

use std::time::{Duration, Instant};

mod common;

#[tokio::test]
async fn test_delay_does_not_block_other_requests() {
    let responder = common::start_responder().await;
    let client = common::client();

    let start = Instant::now();

    let slow = {
        let client = client.clone();
        let url = responder.http_url("/delay?seconds=3");
        tokio::spawn(async move {
            let res = client.get(url).send().await.unwrap();
            (res.status(), start.elapsed())
        })
    };

    // Give the slow request a head start so it is in flight.
    tokio::time::sleep(Duration::from_millis(100)).await;

    let res = client.get(responder.http_url("/test")).send().await.unwrap();
    let fast_elapsed = start.elapsed();
    assert_eq!(res.status(), 200);
    assert!(fast_elapsed < Duration::from_secs(3), "/test took {:?}", fast_elapsed);

    let (status, slow_elapsed) = slow.await.unwrap();
    assert_eq!(status, 200);
    assert!(slow_elapsed >= Duration::from_secs(3));
}

#[tokio::test]
async fn test_delay_does_not_block_other_listener() {
    let responder = common::start_responder().await;
    let client = common::insecure_client();

    let slow = {
        let client = client.clone();
        let url = responder.http_url("/delay?seconds=2");
        tokio::spawn(async move { client.get(url).send().await.unwrap().status() })
    };
    tokio::time::sleep(Duration::from_millis(100)).await;

    let start = Instant::now();
    let res = client.get(responder.https_url("/")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(start.elapsed() < Duration::from_secs(2));

    assert_eq!(slow.await.unwrap(), 200);
}

#[tokio::test]
async fn test_many_parallel_delays_overlap() {
    let responder = common::start_responder().await;
    let client = common::client();

    let start = Instant::now();
    let mut tasks = Vec::new();
    for _ in 0..10 {
        let client = client.clone();
        let url = responder.http_url("/delay?seconds=1");
        tasks.push(tokio::spawn(async move {
            client.get(url).send().await.unwrap().status()
        }));
    }
    for task in tasks {
        assert_eq!(task.await.unwrap(), 200);
    }

    // Ten one-second sleeps run side by side, not back to back.
    assert!(start.elapsed() < Duration::from_secs(5));
}
