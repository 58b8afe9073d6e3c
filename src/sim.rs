use montyhall::{Door, Game};
use rand::Rng;

fn main() -> anyhow::Result<()> {
    let rounds = 100000;
    let mut rng = rand::thread_rng();
    let mut game = Game::new();

    for _ in 0..rounds {
        // 挑战者随机选第一扇门
        let first = rng.gen::<Door>();
        let _ = game.handle_press(&mut rng, first);
        let open = game
            .open_door()
            .ok_or_else(|| anyhow::anyhow!("No door open after the first pick"))?;

        // 抛一枚硬币决定坚持还是换门
        let press = if rng.gen() {
            Door::remaining(first, open)
        } else {
            first
        };
        let _ = game.handle_press(&mut rng, press);

        // 再按一次确认结果，回到开始
        let _ = game.handle_press(&mut rng, press);
    }

    let stats = game.stats();
    println!("游戏设置: 共 3 扇门，模拟了 {} 轮游戏；", stats.games_played());
    if let Some(rate) = stats.win_rate() {
        println!(
            "共赢得奖品 {} 轮，未赢得奖品 {} 轮，胜率 {:.2}%；",
            stats.times_won(),
            stats.games_played() - stats.times_won(),
            rate * 100.0
        );
    }
    if let Some(rate) = stats.switched_win_rate() {
        println!(
            "改变选择 {} 轮，改变后赢得奖品 {} 轮，改变选择胜率 {:.2}%；",
            stats.times_switched(),
            stats.times_switched_and_won(),
            rate * 100.0
        );
    }
    if let Some(rate) = stats.stayed_win_rate() {
        println!(
            "坚持选择 {} 轮，坚持后赢得奖品 {} 轮，坚持选择胜率 {:.2}%。",
            stats.times_stayed(),
            stats.times_stayed_and_won(),
            rate * 100.0
        );
    }

    Ok(())
}
