use montyhall::{Door, Game, Outcome, Snapshot, Stage, Stats};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // 随机源只在进程启动时初始化一次
    let mut rng = StdRng::from_entropy();
    let mut game = Game::new();

    // 单格信箱：只保留最近一次按键，由下面的循环消费
    let (sender, mut receiver) = watch::channel(None::<Door>);
    tokio::spawn(async move {
        if let Err(e) = read_presses(sender).await {
            warn!("Input error: {e}");
        }
    });

    println!("三门问题：输入 1/2/3 按下对应的门（Ctrl-D 退出）。");
    while receiver.changed().await.is_ok() {
        let Some(door) = *receiver.borrow_and_update() else {
            continue;
        };

        match game.handle_press(&mut rng, door) {
            Outcome::Accepted(snapshot) => {
                info!("{}", serde_json::to_string(&snapshot)?);
                render(&snapshot);
            }
            Outcome::Rejected => {
                println!("{} 号门已经开了，请按别的门。", door.number());
            }
        }
    }

    Ok(())
}

/// 读取标准输入，把合法的按键写进信箱；
/// 非法输入在这里被过滤掉，不会传给控制器
async fn read_presses(sender: watch::Sender<Option<Door>>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let door = match input.parse::<u32>() {
            Ok(index) => match Door::try_from(index) {
                Ok(door) => door,
                Err(e) => {
                    warn!("{e}");
                    continue;
                }
            },
            Err(_) => {
                warn!("Not a door: {input}");
                continue;
            }
        };

        if sender.send(Some(door)).is_err() {
            break;
        }
    }

    Ok(())
}

fn render(snapshot: &Snapshot) {
    match snapshot.stage {
        Stage::Started => {
            println!("新的一轮：请按 1/2/3 选择一扇门。");
        }
        Stage::FirstDoorOpen => {
            if let (Some(first), Some(open)) = (snapshot.first_door, snapshot.open_door) {
                println!(
                    "你选了 {} 号门，{} 号门后面没有奖品；",
                    first.number(),
                    open.number()
                );
                println!(
                    "再按 {} 号门表示坚持，按 {} 号门表示换门。",
                    first.number(),
                    Door::remaining(first, open).number()
                );
            }
        }
        Stage::Won => {
            println!("恭喜，你赢得了奖品！");
            print_stats(&snapshot.stats);
            println!("按任意门开始下一轮。");
        }
        Stage::Lost => {
            if let Some(winning) = snapshot.winning_door {
                println!("很遗憾，奖品在 {} 号门后面。", winning.number());
            }
            print_stats(&snapshot.stats);
            println!("按任意门开始下一轮。");
        }
    }
}

// 分母为 0 的比例没有定义，对应的行直接跳过
fn print_stats(stats: &Stats) {
    println!(
        "共完成 {} 轮，赢得奖品 {} 轮；换门 {} 轮，换门后赢 {} 轮。",
        stats.games_played(),
        stats.times_won(),
        stats.times_switched(),
        stats.times_switched_and_won()
    );
    if let Some(rate) = stats.switched_win_rate() {
        println!("换门胜率 {:.2}%；", rate * 100.0);
    }
    if let Some(rate) = stats.stayed_win_rate() {
        println!("坚持胜率 {:.2}%。", rate * 100.0);
    }
}
