//! Sanity loss and the insanity state machine.
//!
//! The three insanity flags on a record are independent. Applying insanity
//! surfaces the most severe one (permanent > indefinite > temporary) without
//! clearing the others.

use serde::Serialize;
use std::fmt;

use crate::aggregates::Investigator;
use crate::value_objects::{Attribute, DiceFormula, RandomSource};

/// A single SAN loss of at least this much triggers temporary insanity.
pub const TEMPORARY_INSANITY_LOSS: i32 = 5;

const STATUS_NORMAL: &str = "正常";
const STATUS_TEMPORARY: &str = "临时性疯狂";

// =============================================================================
// Tables
// =============================================================================

/// One row of the temporary or indefinite insanity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsanityEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub recovery: &'static str,
}

/// A phobia or mania.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Compulsion {
    pub name: &'static str,
    pub description: &'static str,
    pub trigger: &'static str,
}

const fn entry(
    name: &'static str,
    description: &'static str,
    recovery: &'static str,
) -> InsanityEntry {
    InsanityEntry {
        name,
        description,
        recovery,
    }
}

const fn compulsion(
    name: &'static str,
    description: &'static str,
    trigger: &'static str,
) -> Compulsion {
    Compulsion {
        name,
        description,
        trigger,
    }
}

#[rustfmt::skip]
pub const TEMPORARY_INSANITY: [InsanityEntry; 10] = [
    entry("失忆", "调查员陷入短暂的失忆状态，不记得自己的名字、职业和与他人的关系，可能随机游荡。", "记忆慢慢恢复，但调查员可能发现自己身处陌生之地，不知如何到达。"),
    entry("狂躁症", "调查员产生难以控制的冲动，去做危险或不合理的事，如纵火、自残或攻击他人。", "调查员对自己的行为感到震惊和懊悔，需要处理由此造成的后果。"),
    entry("妄想", "调查员相信与刚刚经历的超自然事件相关的虚假事实，例如自己被选中、被诅咒或正被追捕。", "调查员意识到这些想法不合理，但仍留有不安。"),
    entry("幻觉", "调查员看到、听到或感觉到并不存在的恐怖事物。", "幻觉消失，但调查员可能怀疑其他所见之物的真实性。"),
    entry("歇斯底里", "调查员陷入极端情绪，无法控制地大笑、哭泣或尖叫，常使自己暴露于危险。", "调查员精疲力尽，需要一段时间才能恢复正常情绪。"),
    entry("恐惧症", "调查员突然对某物或某种情况产生压倒性的恐惧，被迫远离恐惧之源。", "恐惧消退，但可能在类似情况下重新出现。"),
    entry("恐慌", "调查员被强烈的恐惧淹没，不惜一切手段逃离，可能丢弃武器或推开同伴。", "调查员逐渐冷静，可能因自己的行为感到羞愧。"),
    entry("偏执狂", "调查员高度怀疑周围的一切，把普通举动解读为阴谋或袭击的前兆。", "怀疑减弱，但调查员仍对某些人或情况保持警惕。"),
    entry("昏厥", "压力和恐惧使调查员失去意识，在此期间完全无助。", "调查员逐渐恢复意识，感到头晕、困惑和虚弱。"),
    entry("暴力倾向", "调查员被暴力冲动控制，可能攻击最近的人，无论敌友。", "调查员对自己的行为感到恐惧和懊悔，需要处理造成的伤害。"),
];

#[rustfmt::skip]
pub const INDEFINITE_INSANITY: [InsanityEntry; 10] = [
    entry("健忘症", "调查员遗忘了重要的记忆或个人信息，可能是部分的，也可能是全面的。", "记忆可能慢慢恢复，但某些事件永远无法完全回忆，需要心理治疗和时间。"),
    entry("躁郁症", "调查员的情绪在亢奋自大与抑郁绝望之间突然而剧烈地波动。", "药物治疗和心理咨询可以控制症状，但完全康复需要很长时间。"),
    entry("妄想症", "调查员深信与神话实体或阴谋有关的虚假事实，面对矛盾证据也不改变。", "妄想可能随治疗逐渐减弱，但也许永远不会完全消失。"),
    entry("幻觉", "调查员持续体验到与神话相关的不存在的声音、图像或感觉。", "药物可以减轻幻觉，根本原因需要通过心理治疗解决。"),
    entry("抑郁症", "调查员持续情绪低落、绝望并失去兴趣，退出社交，忽视个人卫生。", "可以通过药物和心理咨询控制，但需要持续的支持和监督。"),
    entry("恐惧症", "调查员对特定物体、生物或情况产生强烈而不合理的恐惧，并尽一切可能回避。", "系统脱敏和认知行为疗法可以克服恐惧症，但需要时间和专业帮助。"),
    entry("创伤后应激障碍", "调查员通过噩梦、闪回或侵入性记忆反复重温创伤事件，并回避相关情境。", "专门的心理治疗和支持小组可以控制症状，但可能持续多年。"),
    entry("被害妄想症", "调查员相信自己正被神秘力量、政府或其他实体监视和迫害，因而极度不信任他人。", "通常需要药物治疗与长期心理咨询相结合。"),
    entry("精神分裂症", "调查员的现实感被扭曲，伴有幻觉、妄想和思维障碍。", "通常需要终身管理，包括药物、心理治疗和社会支持。"),
    entry("解离性身份障碍", "调查员发展出多个各有特征和记忆的人格状态，在压力下交替出现。", "治疗集中于整合不同的人格状态，是一个复杂而漫长的过程。"),
];

pub const PHOBIAS: [Compulsion; 20] = [
    compulsion("飞行恐惧症", "对飞行的恐惧", "乘坐飞机或其他飞行器"),
    compulsion("高空恐惧症", "对高处的恐惧", "处于高处或看到高空景象"),
    compulsion("尖锐物恐惧症", "对尖锐物体的恐惧", "看到或接触刀、针等尖锐物体"),
    compulsion("气味恐惧症", "对气味的恐惧", "闻到特定的气味"),
    compulsion("幽闭恐惧症", "对封闭空间的恐惧", "处于封闭或狭小的空间"),
    compulsion("广场恐惧症", "对开放空间的恐惧", "处于开放、空旷的场所"),
    compulsion("湖水恐惧症", "对湖泊的恐惧", "看到或接近湖泊"),
    compulsion("海洋恐惧症", "对大海的恐惧", "看到或接近海洋"),
    compulsion("血液恐惧症", "对血液的恐惧", "看到或接触血液"),
    compulsion("人群恐惧症", "对人群的恐惧", "处于人群中或看到大量人群"),
    compulsion("狗恐惧症", "对狗的恐惧", "看到或听到狗"),
    compulsion("雷电恐惧症", "对雷电的恐惧", "遇到雷雨或听到雷声"),
    compulsion("死亡恐惧症", "对死亡的恐惧", "看到死亡相关的事物或思考死亡"),
    compulsion("疾病恐惧症", "对疾病的恐惧", "接触可能携带疾病的人或物"),
    compulsion("蛇恐惧症", "对蛇的恐惧", "看到或想象蛇"),
    compulsion("陌生人恐惧症", "对陌生人的恐惧", "遇到或需要与陌生人交流"),
    compulsion("黑暗恐惧症", "对黑暗的恐惧", "处于黑暗环境或夜晚"),
    compulsion("深水恐惧症", "对深水的恐惧", "处于或看到深水区"),
    compulsion("桥梁恐惧症", "对桥梁的恐惧", "需要通过桥梁"),
    compulsion("昆虫恐惧症", "对昆虫的恐惧", "看到或接触昆虫"),
];

pub const MANIAS: [Compulsion; 20] = [
    compulsion("纵火狂", "控制不住放火的冲动", "有机会纵火时"),
    compulsion("偷窃狂", "控制不住偷窃的冲动", "看到没有被监视的贵重物品"),
    compulsion("关系妄想狂", "相信普通事件与自己有特殊关联", "遇到巧合或普通事件"),
    compulsion("嫉妒狂", "对他人产生不合理的嫉妒", "看到他人获得关注或成功"),
    compulsion("臆想狂", "有不切实际的伟大想法或能力", "面对挑战或需要证明自己时"),
    compulsion("恋物狂", "对特定物品有性吸引力", "看到或接触特定物品"),
    compulsion("宗教狂", "对宗教有极端热情", "讨论宗教或神话相关话题"),
    compulsion("自虐狂", "从伤害自己中获得满足", "处于压力或孤独状态"),
    compulsion("窥阴癖", "偷窥他人私密行为的冲动", "有机会偷窥时"),
    compulsion("抢劫狂", "对抢劫有不可抗拒的冲动", "看到可能的抢劫目标"),
    compulsion("旋转狂", "无法控制地旋转或看着物体旋转", "压力情况或看到旋转物体"),
    compulsion("妄想狂", "持有不合理的妄想", "面对质疑或怀疑时"),
    compulsion("杀人狂", "有杀人的冲动", "感到被威胁或看到潜在受害者"),
    compulsion("被赶走恐惧症", "害怕被驱逐出社交圈", "社交场合或群体讨论"),
    compulsion("过度洁癖", "对清洁有不健康的执着", "接触被认为不干净的物体或环境"),
    compulsion("向往病痛狂", "渴望生病或受伤", "受到医疗关注或看到他人获得同情"),
    compulsion("夸大狂", "过度夸大事实或自我能力", "讲述经历或能力时"),
    compulsion("自恋狂", "对自己过度痴迷", "照镜子或成为关注焦点"),
    compulsion("收集癖", "无法控制地收集特定物品", "看到收集目标或有机会获取"),
    compulsion("暴食症", "无法控制地暴饮暴食", "面对食物或压力情况"),
];

pub const PHOBIA_EFFECT: &str =
    "遇到触发条件时需进行理智检定。失败则调查员会尝试逃离或避开恐惧源。";
pub const MANIA_EFFECT: &str =
    "遇到触发条件时需进行意志检定。失败则调查员被迫做出与狂躁症相关的行为。";

// =============================================================================
// Reports
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsanityKind {
    None,
    Temporary,
    Indefinite,
    Permanent,
}

impl InsanityKind {
    /// Most severe flag set on `record`.
    pub fn of(record: &Investigator) -> Self {
        if record.is_permanently_insane() {
            InsanityKind::Permanent
        } else if record.is_indefinitely_insane() {
            InsanityKind::Indefinite
        } else if record.is_temporarily_insane() {
            InsanityKind::Temporary
        } else {
            InsanityKind::None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            InsanityKind::None => "正常",
            InsanityKind::Temporary => "临时性疯狂",
            InsanityKind::Indefinite => "不定性疯狂",
            InsanityKind::Permanent => "永久性疯狂",
        }
    }
}

impl fmt::Display for InsanityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A drawn temporary or indefinite bout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsanityBout {
    pub entry: InsanityEntry,
    /// The 1d10 that picked the entry.
    pub roll: i32,
    /// "7轮" or "40小时".
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsanityReport {
    pub kind: InsanityKind,
    pub bout: Option<InsanityBout>,
    pub phobia: Option<Compulsion>,
    pub mania: Option<Compulsion>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecoveryOutcome {
    pub kind: InsanityKind,
    pub success: bool,
    /// The POW check roll, when one was made.
    pub roll: Option<i32>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SanityLoss {
    pub previous: i32,
    pub current: i32,
    pub temporary_triggered: bool,
    pub permanent_triggered: bool,
}

impl SanityLoss {
    pub fn lost(&self) -> i32 {
        self.previous - self.current
    }
}

// =============================================================================
// Operations
// =============================================================================

/// Textual duration: 1d10 rounds for temporary, 1d10 × 10 hours otherwise.
pub fn roll_duration(kind: InsanityKind, rng: &mut impl RandomSource) -> String {
    let rolled = DiceFormula::D10.roll_total(rng);
    match kind {
        InsanityKind::Temporary => format!("{rolled}轮"),
        _ => format!("{}小时", rolled * 10),
    }
}

fn draw_bout(
    table: &[InsanityEntry; 10],
    kind: InsanityKind,
    rng: &mut impl RandomSource,
) -> InsanityBout {
    let roll = DiceFormula::D10.roll_total(rng).clamp(1, 10);
    let index = usize::try_from(roll - 1).unwrap_or(0);
    let entry = table[index.min(table.len() - 1)];
    InsanityBout {
        entry,
        roll,
        duration: roll_duration(kind, rng),
    }
}

fn draw_compulsion(table: &[Compulsion], rng: &mut impl RandomSource) -> Option<Compulsion> {
    rng.choose(table).copied()
}

/// Surfaces the most severe insanity on `record`.
///
/// Permanent adds a phobia and a mania (set semantics). Indefinite and
/// temporary draw a bout and rewrite `status`. A sane record is untouched.
pub fn apply_insanity(record: &mut Investigator, rng: &mut impl RandomSource) -> InsanityReport {
    let kind = InsanityKind::of(record);
    let mut report = InsanityReport {
        kind,
        bout: None,
        phobia: None,
        mania: None,
        message: String::new(),
    };

    match kind {
        InsanityKind::Permanent => {
            report.phobia = draw_compulsion(&PHOBIAS, rng);
            report.mania = draw_compulsion(&MANIAS, rng);
            if let Some(phobia) = report.phobia {
                record.add_phobia(phobia.name);
            }
            if let Some(mania) = report.mania {
                record.add_mania(mania.name);
            }
            report.message = "调查员的理智已完全崩溃，患上了永久性疯狂。".to_string();
        }
        InsanityKind::Indefinite | InsanityKind::Temporary => {
            let table = if kind == InsanityKind::Indefinite {
                &INDEFINITE_INSANITY
            } else {
                &TEMPORARY_INSANITY
            };
            let bout = draw_bout(table, kind, rng);
            record.set_status(format!("{kind}：{}", bout.entry.name));
            report.message = format!(
                "调查员陷入{kind}状态：{}，预计持续{}。",
                bout.entry.name, bout.duration
            );
            report.bout = Some(bout);
        }
        InsanityKind::None => {
            report.message = "调查员目前精神状态正常。".to_string();
        }
    }
    report
}

/// One recovery attempt against the most severe insanity on `record`.
pub fn attempt_recovery(record: &mut Investigator, rng: &mut impl RandomSource) -> RecoveryOutcome {
    let kind = InsanityKind::of(record);
    let outcome = |success: bool, roll: Option<i32>, message: &str| RecoveryOutcome {
        kind,
        success,
        roll,
        message: message.to_string(),
    };

    match kind {
        InsanityKind::Permanent => {
            outcome(false, None, "永久性疯狂无法自行恢复，需要长期专业治疗。")
        }
        InsanityKind::Indefinite => {
            let roll = rng.roll_d100();
            if roll <= record.attribute(Attribute::Power) {
                record.set_indefinite_insanity(false);
                let status = if record.is_temporarily_insane() {
                    STATUS_TEMPORARY
                } else {
                    STATUS_NORMAL
                };
                record.set_status(status);
                outcome(true, Some(roll), "调查员成功从不定性疯狂中恢复。")
            } else {
                outcome(false, Some(roll), "调查员仍处于不定性疯狂状态。")
            }
        }
        InsanityKind::Temporary => {
            record.set_temporary_insanity(false);
            record.set_status(STATUS_NORMAL);
            outcome(true, None, "调查员从临时性疯狂中恢复。")
        }
        InsanityKind::None => outcome(true, None, "调查员精神状态正常，无需恢复。"),
    }
}

/// Takes `amount` SAN from `record`, floored at 0.
///
/// A single loss of 5 or more sets temporary insanity; reaching 0 sets
/// permanent insanity.
pub fn lose_sanity(record: &mut Investigator, amount: i32) -> SanityLoss {
    let previous = record.san();
    record.set_san(previous - amount.max(0));
    let current = record.san();

    let temporary_triggered = previous - current >= TEMPORARY_INSANITY_LOSS;
    if temporary_triggered {
        record.set_temporary_insanity(true);
    }
    let permanent_triggered = current == 0 && previous > 0;
    if permanent_triggered {
        record.set_permanent_insanity(true);
    }

    SanityLoss {
        previous,
        current,
        temporary_triggered,
        permanent_triggered,
    }
}
