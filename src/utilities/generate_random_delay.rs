use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::{sleep, Duration};
use tracing::debug;

/// Sleeps for a random duration in `min_delay..max_delay` milliseconds, or for
/// exactly `min_delay` when the range is empty. Zero means no pause.
pub async fn generate_random_delay(min_delay: u64, max_delay: u64) {
    let delay = if max_delay > min_delay {
        StdRng::from_entropy().gen_range(min_delay..max_delay)
    } else {
        min_delay
    };

    if delay == 0 {
        return;
    }

    debug!(delay_ms = delay, "Waiting before next product");
    sleep(Duration::from_millis(delay)).await;
}
