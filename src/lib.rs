mod error;

pub use error::*;
use rand::distributions::Standard;
use rand::prelude::Distribution;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// 门的序号，固定只有三扇门，没有 0 号门
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq)]
pub enum Door {
    /// 1 号门
    One,

    /// 2 号门
    Two,

    /// 3 号门
    Three,
}

impl Door {
    /// 全部三扇门
    pub const ALL: [Door; 3] = [Door::One, Door::Two, Door::Three];

    /// 门的序号（从 1 开始）
    pub fn number(self) -> u32 {
        match self {
            Door::One => 1,
            Door::Two => 2,
            Door::Three => 3,
        }
    }

    /// 除自己之外的另外两扇门
    pub fn others(self) -> (Door, Door) {
        match self {
            Door::One => (Door::Two, Door::Three),
            Door::Two => (Door::One, Door::Three),
            Door::Three => (Door::One, Door::Two),
        }
    }

    /// 给定两扇不同的门，返回剩下的第三扇
    pub fn remaining(a: Door, b: Door) -> Door {
        match (a, b) {
            (Door::One, Door::Two) | (Door::Two, Door::One) => Door::Three,
            (Door::One, Door::Three) | (Door::Three, Door::One) => Door::Two,
            (Door::Two, Door::Three) | (Door::Three, Door::Two) => Door::One,
            (a, b) => panic!("a = {:?}, b = {:?}", a, b),
        }
    }
}

impl TryFrom<u32> for Door {
    type Error = Error;

    /// 把外部输入的原始序号转换成门；0 和超出范围的值都不是门
    fn try_from(value: u32) -> Result<Self> {
        match value {
            1 => Ok(Door::One),
            2 => Ok(Door::Two),
            3 => Ok(Door::Three),
            other => Err(Error::InvalidDoorIndex(other)),
        }
    }
}

impl Distribution<Door> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Door {
        match rng.gen_range(0..3u32) {
            0 => Door::One,
            1 => Door::Two,
            _ => Door::Three,
        }
    }
}

/// 一轮游戏的各个阶段
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq)]
pub enum Stage {
    /// 等待挑战者选第一扇门
    Started,

    /// 已经打开一扇没有奖品的门，等待换门或坚持
    FirstDoorOpen,

    /// 本轮赢得奖品
    Won,

    /// 本轮没有赢得奖品
    Lost,
}

impl Default for Stage {
    fn default() -> Self {
        Self::Started
    }
}

impl Stage {
    /// 一轮是否已经结束
    pub fn is_over(&self) -> bool {
        matches!(self, Stage::Won | Stage::Lost)
    }
}

/// 主持人开门：在两扇未被选中的门里挑一扇没有奖品的打开
///
/// 挑战者没有选中奖品时，唯一的候选门是确定的；
/// 挑战者恰好选中奖品时，用一个随机位在剩下两扇门里挑一扇。
pub fn reveal<R: Rng + ?Sized>(rng: &mut R, winning_door: Door, first_door: Door) -> Door {
    let open_door = if first_door != winning_door {
        Door::remaining(first_door, winning_door)
    } else {
        let (a, b) = first_door.others();
        if rng.gen() {
            a
        } else {
            b
        }
    };

    // 打开的门不可能是奖品门，也不可能是挑战者已经选的门
    assert_ne!(open_door, winning_door);
    assert_ne!(open_door, first_door);
    open_door
}

/// 跨轮次的累计统计，只增不减
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq, Default)]
pub struct Stats {
    /// 完成的轮数
    games_played: u32,

    /// 改变选择的轮数
    times_switched: u32,

    /// 改变选择并赢得奖品的轮数
    times_switched_and_won: u32,

    /// 赢得奖品的轮数
    times_won: u32,
}

impl Stats {
    /// 完成的轮数
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// 改变选择的轮数
    pub fn times_switched(&self) -> u32 {
        self.times_switched
    }

    /// 改变选择并赢得奖品的轮数
    pub fn times_switched_and_won(&self) -> u32 {
        self.times_switched_and_won
    }

    /// 赢得奖品的轮数
    pub fn times_won(&self) -> u32 {
        self.times_won
    }

    /// 坚持选择的轮数
    pub fn times_stayed(&self) -> u32 {
        self.games_played - self.times_switched
    }

    /// 坚持选择并赢得奖品的轮数
    pub fn times_stayed_and_won(&self) -> u32 {
        self.times_won - self.times_switched_and_won
    }

    /// 总胜率；一轮都没完成时没有定义
    pub fn win_rate(&self) -> Option<f64> {
        ratio(self.times_won, self.games_played)
    }

    /// 换门后的胜率；从未换过门时没有定义
    pub fn switched_win_rate(&self) -> Option<f64> {
        ratio(self.times_switched_and_won, self.times_switched)
    }

    /// 坚持后的胜率；从未坚持过时没有定义
    pub fn stayed_win_rate(&self) -> Option<f64> {
        ratio(self.times_stayed_and_won(), self.times_stayed())
    }

    /// 一轮结束时更新计数；每轮只会被调用一次
    fn record_round(&mut self, won: bool, switched: bool) {
        self.games_played += 1;
        if won {
            self.times_won += 1;
        }
        if switched {
            self.times_switched += 1;
            if won {
                self.times_switched_and_won += 1;
            }
        }
    }
}

// 分母为 0 时比例没有定义
fn ratio(numerator: u32, denominator: u32) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}

/// 一次按键被接受后展示层能看到的状态快照
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq)]
pub struct Snapshot {
    /// 当前阶段
    pub stage: Stage,

    /// 挑战者第一次选择的门
    pub first_door: Option<Door>,

    /// 主持人打开的门
    pub open_door: Option<Door>,

    /// 奖品所在的门，只在一轮结束后给出
    pub winning_door: Option<Door>,

    /// 累计统计
    pub stats: Stats,
}

/// 一次按键的处理结果
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// 按键被接受，状态已经前进
    Accepted(Snapshot),

    /// 按到了当前不允许的门，状态保持不变
    Rejected,
}

/// 游戏控制器：持有一轮游戏的状态和跨轮次的统计
#[derive(Debug, Serialize, Deserialize)]
pub struct Game {
    /// 当前阶段
    stage: Stage,

    /// 挑战者第一次选择的门
    first_door: Option<Door>,

    /// 主持人打开的门
    open_door: Option<Door>,

    /// 奖品所在的门
    winning_door: Option<Door>,

    /// 累计统计
    stats: Stats,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// 创建控制器，从等待第一次选门的阶段开始
    pub fn new() -> Self {
        Self {
            stage: Stage::Started,
            first_door: None,
            open_door: None,
            winning_door: None,
            stats: Stats::default(),
        }
    }

    /// 当前阶段
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// 挑战者第一次选择的门
    pub fn first_door(&self) -> Option<Door> {
        self.first_door
    }

    /// 主持人打开的门
    pub fn open_door(&self) -> Option<Door> {
        self.open_door
    }

    /// 奖品所在的门；一轮结束之前不会暴露给展示层
    pub fn winning_door(&self) -> Option<Door> {
        if self.stage.is_over() {
            self.winning_door
        } else {
            None
        }
    }

    /// 累计统计
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// 当前状态的快照，供展示层读取
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            stage: self.stage,
            first_door: self.first_door,
            open_door: self.open_door,
            winning_door: self.winning_door(),
            stats: self.stats,
        }
    }

    /// 处理一次按键
    ///
    /// 状态机一次只消费一个事件；在等待换门的阶段按下已经打开的门
    /// 会返回 [`Outcome::Rejected`]，状态保持不变，等下一次按键即可。
    pub fn handle_press<R: Rng + ?Sized>(&mut self, rng: &mut R, press: Door) -> Outcome {
        match self.stage {
            Stage::Started => {
                // 本轮的奖品门只在这里抽取一次
                let winning_door = rng.gen::<Door>();
                self.winning_door = Some(winning_door);
                self.first_door = Some(press);
                self.open_door = Some(reveal(rng, winning_door, press));
                self.stage = Stage::FirstDoorOpen;
            }
            Stage::FirstDoorOpen => {
                if self.open_door == Some(press) {
                    return Outcome::Rejected;
                }

                let won = self.winning_door == Some(press);
                let switched = self.first_door != Some(press);
                self.stage = if won { Stage::Won } else { Stage::Lost };

                // 计数只在离开 FirstDoorOpen 的这一次迁移里更新
                self.stats.record_round(won, switched);
            }
            Stage::Won | Stage::Lost => {
                // 这次按键只是确认结果；下一次按键才会开始新的一轮
                self.stage = Stage::Started;
                self.first_door = None;
                self.open_door = None;
                self.winning_door = None;
            }
        }

        Outcome::Accepted(self.snapshot())
    }
}
