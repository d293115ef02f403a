//! # 核心类型定义
//!
//! 天干、地支、五行、十神等封闭枚举，以及引擎的输入输出记录。
//!
//! 所有规则表都以这些枚举为键做穷举匹配，由编译器保证完备性，
//! 运行期不存在"未知符号"回退路径。

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::pallet_prelude::{ConstU32, RuntimeDebug};
use frame_support::BoundedVec;
use scale_info::TypeInfo;

/// 能量基准：1.0 记为 100（厘点）
pub const ENERGY_SCALE: u32 = 100;

// ============================================================================
// 干支与五行
// ============================================================================

/// 十天干
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum TianGan {
	/// 甲（阳木）
	Jia,
	/// 乙（阴木）
	Yi,
	/// 丙（阳火）
	Bing,
	/// 丁（阴火）
	Ding,
	/// 戊（阳土）
	Wu,
	/// 己（阴土）
	Ji,
	/// 庚（阳金）
	Geng,
	/// 辛（阴金）
	Xin,
	/// 壬（阳水）
	Ren,
	/// 癸（阴水）
	Gui,
}

/// 全部天干，按序排列（用于确定性遍历，替代任何依赖哈希序的迭代）
pub const ALL_GAN: [TianGan; 10] = [
	TianGan::Jia, TianGan::Yi, TianGan::Bing, TianGan::Ding, TianGan::Wu,
	TianGan::Ji, TianGan::Geng, TianGan::Xin, TianGan::Ren, TianGan::Gui,
];

impl TianGan {
	/// 从索引构造（0=甲 .. 9=癸）
	pub fn from_index(idx: u8) -> Option<Self> {
		ALL_GAN.get(idx as usize).copied()
	}

	pub fn index(&self) -> u8 {
		*self as u8
	}

	/// 所属五行
	pub fn wu_xing(&self) -> WuXing {
		match self {
			TianGan::Jia | TianGan::Yi => WuXing::Mu,
			TianGan::Bing | TianGan::Ding => WuXing::Huo,
			TianGan::Wu | TianGan::Ji => WuXing::Tu,
			TianGan::Geng | TianGan::Xin => WuXing::Jin,
			TianGan::Ren | TianGan::Gui => WuXing::Shui,
		}
	}

	/// 阳干为 true
	pub fn is_yang(&self) -> bool {
		self.index() % 2 == 0
	}

	pub fn name(&self) -> &'static str {
		match self {
			TianGan::Jia => "甲",
			TianGan::Yi => "乙",
			TianGan::Bing => "丙",
			TianGan::Ding => "丁",
			TianGan::Wu => "戊",
			TianGan::Ji => "己",
			TianGan::Geng => "庚",
			TianGan::Xin => "辛",
			TianGan::Ren => "壬",
			TianGan::Gui => "癸",
		}
	}
}

/// 十二地支
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum DiZhi {
	/// 子（水）
	Zi,
	/// 丑（土）
	Chou,
	/// 寅（木）
	Yin,
	/// 卯（木）
	Mao,
	/// 辰（土）
	Chen,
	/// 巳（火）
	Si,
	/// 午（火）
	WuZ,
	/// 未（土）
	Wei,
	/// 申（金）
	Shen,
	/// 酉（金）
	You,
	/// 戌（土）
	Xu,
	/// 亥（水）
	Hai,
}

/// 全部地支，按序排列
pub const ALL_ZHI: [DiZhi; 12] = [
	DiZhi::Zi, DiZhi::Chou, DiZhi::Yin, DiZhi::Mao, DiZhi::Chen, DiZhi::Si,
	DiZhi::WuZ, DiZhi::Wei, DiZhi::Shen, DiZhi::You, DiZhi::Xu, DiZhi::Hai,
];

impl DiZhi {
	/// 从索引构造（0=子 .. 11=亥）
	pub fn from_index(idx: u8) -> Option<Self> {
		ALL_ZHI.get(idx as usize).copied()
	}

	pub fn index(&self) -> u8 {
		*self as u8
	}

	/// 地支本气五行
	pub fn wu_xing(&self) -> WuXing {
		match self {
			DiZhi::Zi | DiZhi::Hai => WuXing::Shui,
			DiZhi::Yin | DiZhi::Mao => WuXing::Mu,
			DiZhi::Si | DiZhi::WuZ => WuXing::Huo,
			DiZhi::Shen | DiZhi::You => WuXing::Jin,
			DiZhi::Chou | DiZhi::Chen | DiZhi::Wei | DiZhi::Xu => WuXing::Tu,
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			DiZhi::Zi => "子",
			DiZhi::Chou => "丑",
			DiZhi::Yin => "寅",
			DiZhi::Mao => "卯",
			DiZhi::Chen => "辰",
			DiZhi::Si => "巳",
			DiZhi::WuZ => "午",
			DiZhi::Wei => "未",
			DiZhi::Shen => "申",
			DiZhi::You => "酉",
			DiZhi::Xu => "戌",
			DiZhi::Hai => "亥",
		}
	}
}

/// 五行，按相生序排列（木生火、火生土、土生金、金生水、水生木）
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum WuXing {
	/// 木
	Mu,
	/// 火
	Huo,
	/// 土
	Tu,
	/// 金
	Jin,
	/// 水
	Shui,
}

impl WuXing {
	pub fn index(&self) -> u8 {
		*self as u8
	}

	/// 我生者（相生序的下一位）
	pub fn sheng(&self) -> WuXing {
		match self {
			WuXing::Mu => WuXing::Huo,
			WuXing::Huo => WuXing::Tu,
			WuXing::Tu => WuXing::Jin,
			WuXing::Jin => WuXing::Shui,
			WuXing::Shui => WuXing::Mu,
		}
	}

	/// 我克者（相生序隔一位）
	pub fn ke(&self) -> WuXing {
		self.sheng().sheng()
	}

	/// 相生序距离：other 落在以 self 为圆心的第几档（0..=4）
	pub fn sheng_distance(&self, other: WuXing) -> u8 {
		(other.index() + 5 - self.index()) % 5
	}
}

/// 干支对（六十甲子之一）
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct GanZhi {
	pub gan: TianGan,
	pub zhi: DiZhi,
}

impl GanZhi {
	/// 从六十甲子索引构造（0=甲子 .. 59=癸亥）
	pub fn from_index(idx: u8) -> Option<Self> {
		if idx >= 60 {
			return None;
		}
		Some(GanZhi {
			gan: TianGan::from_index(idx % 10)?,
			zhi: DiZhi::from_index(idx % 12)?,
		})
	}

	/// 六十甲子索引
	pub fn index(&self) -> u8 {
		let g = self.gan.index() as i16;
		let z = self.zhi.index() as i16;
		// 中国剩余定理：唯一解 i ≡ g (mod 10)，i ≡ z (mod 12)
		(((6 * g - 5 * z) % 60 + 60) % 60) as u8
	}
}

// ============================================================================
// 四柱
// ============================================================================

/// 柱位
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum ZhuWei {
	Year,
	Month,
	Day,
	Hour,
}

pub const ALL_ZHU_WEI: [ZhuWei; 4] = [ZhuWei::Year, ZhuWei::Month, ZhuWei::Day, ZhuWei::Hour];

/// 四柱八字。日柱天干为日主，是全部十神关系的参照点。
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct SiZhu {
	pub year: GanZhi,
	pub month: GanZhi,
	pub day: GanZhi,
	pub hour: GanZhi,
}

impl SiZhu {
	pub fn zhus(&self) -> [GanZhi; 4] {
		[self.year, self.month, self.day, self.hour]
	}

	pub fn gans(&self) -> [TianGan; 4] {
		[self.year.gan, self.month.gan, self.day.gan, self.hour.gan]
	}

	pub fn zhis(&self) -> [DiZhi; 4] {
		[self.year.zhi, self.month.zhi, self.day.zhi, self.hour.zhi]
	}

	/// 日主
	pub fn day_master(&self) -> TianGan {
		self.day.gan
	}
}

/// 排盘输入：公历时间模式或四柱直录模式，二选一
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum ChartInput {
	/// 公历日期 + 可选经度（1/10000 度，提供时按真太阳时修正时柱）
	Solar {
		year: u16,
		month: u8,
		day: u8,
		hour: u8,
		minute: u8,
		longitude: Option<i32>,
	},
	/// 四柱直录：四干 + 四支，长度不等于 4 一律拒绝，不做补齐或截断
	Direct {
		gans: BoundedVec<TianGan, ConstU32<8>>,
		zhis: BoundedVec<DiZhi, ConstU32<8>>,
	},
}

// ============================================================================
// 十神
// ============================================================================

/// 十神：任意天干相对日主的关系标签
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum ShiShen {
	/// 比肩（同五行同阴阳）
	BiJian,
	/// 劫财（同五行异阴阳）
	JieCai,
	/// 食神（我生、同阴阳）
	ShiShen,
	/// 伤官（我生、异阴阳）
	ShangGuan,
	/// 偏财（我克、同阴阳）
	PianCai,
	/// 正财（我克、异阴阳）
	ZhengCai,
	/// 七杀（克我、同阴阳）
	QiSha,
	/// 正官（克我、异阴阳）
	ZhengGuan,
	/// 偏印（生我、同阴阳）
	PianYin,
	/// 正印（生我、异阴阳）
	ZhengYin,
}

pub const ALL_SHI_SHEN: [ShiShen; 10] = [
	ShiShen::BiJian, ShiShen::JieCai, ShiShen::ShiShen, ShiShen::ShangGuan,
	ShiShen::PianCai, ShiShen::ZhengCai, ShiShen::QiSha, ShiShen::ZhengGuan,
	ShiShen::PianYin, ShiShen::ZhengYin,
];

impl ShiShen {
	pub fn index(&self) -> u8 {
		*self as u8
	}

	/// 五类归并：比劫 / 食伤 / 财 / 官杀 / 印
	pub fn category(&self) -> ShiShenCategory {
		match self {
			ShiShen::BiJian | ShiShen::JieCai => ShiShenCategory::BiJie,
			ShiShen::ShiShen | ShiShen::ShangGuan => ShiShenCategory::ShiShang,
			ShiShen::PianCai | ShiShen::ZhengCai => ShiShenCategory::Cai,
			ShiShen::QiSha | ShiShen::ZhengGuan => ShiShenCategory::GuanSha,
			ShiShen::PianYin | ShiShen::ZhengYin => ShiShenCategory::Yin,
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			ShiShen::BiJian => "比肩",
			ShiShen::JieCai => "劫财",
			ShiShen::ShiShen => "食神",
			ShiShen::ShangGuan => "伤官",
			ShiShen::PianCai => "偏财",
			ShiShen::ZhengCai => "正财",
			ShiShen::QiSha => "七杀",
			ShiShen::ZhengGuan => "正官",
			ShiShen::PianYin => "偏印",
			ShiShen::ZhengYin => "正印",
		}
	}
}

/// 十神五类
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum ShiShenCategory {
	/// 比劫（同我）
	BiJie,
	/// 食伤（我生）
	ShiShang,
	/// 财（我克）
	Cai,
	/// 官杀（克我）
	GuanSha,
	/// 印（生我）
	Yin,
}

impl ShiShenCategory {
	/// 类别位掩码，用于格局喜忌表
	pub fn bit(&self) -> u8 {
		1 << (*self as u8)
	}
}

// ============================================================================
// 格局与强弱
// ============================================================================

/// 格局（十一种基准名）
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum GeJu {
	/// 正官格
	ZhengGuan,
	/// 七杀格
	QiSha,
	/// 正财格
	ZhengCai,
	/// 偏财格
	PianCai,
	/// 正印格
	ZhengYin,
	/// 偏印格
	PianYin,
	/// 食神格
	ShiShen,
	/// 伤官格
	ShangGuan,
	/// 建禄格（月令比肩归位）
	JianLu,
	/// 月刃格（月令劫财归位）
	YueRen,
	/// 专旺格（全局会聚且与日主同气）
	ZhuanWang,
}

impl GeJu {
	pub fn index(&self) -> u8 {
		*self as u8
	}

	/// 格局的基准十神
	pub fn base_shi_shen(&self) -> ShiShen {
		match self {
			GeJu::ZhengGuan => ShiShen::ZhengGuan,
			GeJu::QiSha => ShiShen::QiSha,
			GeJu::ZhengCai => ShiShen::ZhengCai,
			GeJu::PianCai => ShiShen::PianCai,
			GeJu::ZhengYin => ShiShen::ZhengYin,
			GeJu::PianYin => ShiShen::PianYin,
			GeJu::ShiShen => ShiShen::ShiShen,
			GeJu::ShangGuan => ShiShen::ShangGuan,
			GeJu::JianLu | GeJu::ZhuanWang => ShiShen::BiJian,
			GeJu::YueRen => ShiShen::JieCai,
		}
	}
}

/// 身强弱五档
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum QiangRuo {
	/// 极旺（比印占比 > 90%）
	JiWang,
	/// 偏强（≥ 72%）
	Qiang,
	/// 中和偏强（≥ 50%）
	ZhongHeQiang,
	/// 中和偏弱（≥ 24%）
	ZhongHeRuo,
	/// 极弱（< 24%）
	JiRuo,
}

impl QiangRuo {
	/// 规则表查询用的强弱布尔
	pub fn is_strong(&self) -> bool {
		matches!(self, QiangRuo::JiWang | QiangRuo::Qiang | QiangRuo::ZhongHeQiang)
	}

	/// 中和带（用神仲裁时允许调候优先）
	pub fn is_mid_range(&self) -> bool {
		matches!(self, QiangRuo::ZhongHeQiang | QiangRuo::ZhongHeRuo)
	}
}

// ============================================================================
// 会局与交互
// ============================================================================

/// 会局种类：方局优先于三合局
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum JuKind {
	/// 方局（三会）
	FangJu,
	/// 三合局
	SanHeJu,
}

/// 检出的会局：统一后的主导五行 + 入局地支标记
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct Ju {
	pub kind: JuKind,
	pub element: WuXing,
	/// 四柱地支是否入局
	pub members: [bool; 4],
}

impl Ju {
	/// 四支全部入局
	pub fn is_full(&self) -> bool {
		self.members.iter().all(|m| *m)
	}
}

/// 交互种类
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum InteractionKind {
	/// 天干五合
	GanHe,
	/// 地支六合
	ZhiHe,
	/// 地支六冲
	ZhiChong,
}

/// 交互日志条目（仅用于补偿计分，不参与古典盘呈现）
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct InteractionRecord {
	pub kind: InteractionKind,
	/// 参与柱位（下标 0..=3）
	pub a: u8,
	pub b: u8,
	/// 合化成功 / 冲未被局化解
	pub success: bool,
	/// 施加的乘数（百分比，100 = 无惩罚）
	pub mult_pct: u8,
}

/// 交互解算输出：柱位乘数 + 两路补偿合计
#[derive(Clone, PartialEq, Eq, RuntimeDebug)]
pub struct InteractionOutcome {
	/// 各柱天干能量乘数（百分比，复合累乘）
	pub gan_mult: [u32; 4],
	/// 各柱地支能量乘数（百分比，复合累乘）
	pub zhi_mult: [u32; 4],
	/// 冲类补偿（注入 Ne）
	pub ne_comp: u32,
	/// 合类补偿（注入 Ni）
	pub ni_comp: u32,
	pub records: sp_std::vec::Vec<InteractionRecord>,
}

// ============================================================================
// 能量表
// ============================================================================

/// 十干能量表。值恒为非负整数（厘点），缺席即 0，天然不存在 NaN。
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug, Default)]
pub struct GanEnergyTable {
	pub e: [u32; 10],
}

impl GanEnergyTable {
	pub fn get(&self, gan: TianGan) -> u32 {
		self.e[gan.index() as usize]
	}

	pub fn add(&mut self, gan: TianGan, amount: u32) {
		let slot = &mut self.e[gan.index() as usize];
		*slot = slot.saturating_add(amount);
	}

	pub fn total(&self) -> u64 {
		self.e.iter().map(|v| *v as u64).sum()
	}

	/// 某五行的能量合计
	pub fn element_energy(&self, wx: WuXing) -> u64 {
		ALL_GAN
			.iter()
			.filter(|g| g.wu_xing() == wx)
			.map(|g| self.get(*g) as u64)
			.sum()
	}

	/// 某十神类别的能量合计（相对给定日主）
	pub fn category_energy(&self, day_master: TianGan, cat: ShiShenCategory) -> u64 {
		ALL_GAN
			.iter()
			.filter(|g| crate::constants::shi_shen_of(day_master, **g).category() == cat)
			.map(|g| self.get(*g) as u64)
			.sum()
	}
}

// ============================================================================
// 认知功能
// ============================================================================

/// 八维认知功能
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum CognitiveFunction {
	Te,
	Ti,
	Fe,
	Fi,
	Se,
	Si,
	Ne,
	Ni,
}

pub const ALL_FUNCTIONS: [CognitiveFunction; 8] = [
	CognitiveFunction::Te, CognitiveFunction::Ti, CognitiveFunction::Fe,
	CognitiveFunction::Fi, CognitiveFunction::Se, CognitiveFunction::Si,
	CognitiveFunction::Ne, CognitiveFunction::Ni,
];

impl CognitiveFunction {
	pub fn index(&self) -> u8 {
		*self as u8
	}
}

/// 十六型人格标签
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum MbtiType {
	Intj,
	Intp,
	Entj,
	Entp,
	Infj,
	Infp,
	Enfj,
	Enfp,
	Istj,
	Isfj,
	Estj,
	Esfj,
	Istp,
	Isfp,
	Estp,
	Esfp,
}

impl MbtiType {
	pub fn code(&self) -> &'static str {
		match self {
			MbtiType::Intj => "INTJ",
			MbtiType::Intp => "INTP",
			MbtiType::Entj => "ENTJ",
			MbtiType::Entp => "ENTP",
			MbtiType::Infj => "INFJ",
			MbtiType::Infp => "INFP",
			MbtiType::Enfj => "ENFJ",
			MbtiType::Enfp => "ENFP",
			MbtiType::Istj => "ISTJ",
			MbtiType::Isfj => "ISFJ",
			MbtiType::Estj => "ESTJ",
			MbtiType::Esfj => "ESFJ",
			MbtiType::Istp => "ISTP",
			MbtiType::Isfp => "ISFP",
			MbtiType::Estp => "ESTP",
			MbtiType::Esfp => "ESFP",
		}
	}
}

/// 天干显潜模式
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum DisplayMode {
	/// 显性
	Manifest,
	/// 潜性
	Latent,
}

/// 单干能量明细
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct StemEnergy {
	pub gan: TianGan,
	/// 聚合后能量（厘点）
	pub energy: u32,
	/// 占比（千分比）
	pub share_pm: u16,
	pub mode: DisplayMode,
}

// ============================================================================
// 用神
// ============================================================================

/// 用神仲裁来源
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum YongShenSource {
	/// 调候优先
	Climate,
	/// 扶抑平衡
	Balance,
	/// 无可选之神
	None,
}

/// 用神决策记录
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct YongShenDecision {
	/// 调候用神（无调候需求或元素缺席时为 None）
	pub climate_god: Option<TianGan>,
	/// 扶抑用神
	pub balance_god: Option<TianGan>,
	/// 最终选定
	pub chosen: Option<TianGan>,
	pub source: YongShenSource,
}

// ============================================================================
// 古典注记
// ============================================================================

/// 十二长生
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum ChangSheng {
	/// 长生
	ZhangSheng,
	/// 沐浴
	MuYu,
	/// 冠带
	GuanDai,
	/// 临官
	LinGuan,
	/// 帝旺
	DiWang,
	/// 衰
	Shuai,
	/// 病
	Bing,
	/// 死
	Si,
	/// 墓
	Mu,
	/// 绝
	Jue,
	/// 胎
	Tai,
	/// 养
	Yang,
}

pub const ALL_CHANG_SHENG: [ChangSheng; 12] = [
	ChangSheng::ZhangSheng, ChangSheng::MuYu, ChangSheng::GuanDai,
	ChangSheng::LinGuan, ChangSheng::DiWang, ChangSheng::Shuai,
	ChangSheng::Bing, ChangSheng::Si, ChangSheng::Mu,
	ChangSheng::Jue, ChangSheng::Tai, ChangSheng::Yang,
];

/// 神煞
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum ShenSha {
	/// 天乙贵人
	TianYiGuiRen,
	/// 文昌贵人
	WenChangGuiRen,
	/// 禄神
	LuShen,
	/// 羊刃
	YangRen,
	/// 桃花（咸池）
	TaoHua,
	/// 驿马
	YiMa,
	/// 华盖
	HuaGai,
	/// 将星
	JiangXing,
	/// 红鸾
	HongLuan,
	/// 天喜
	TianXi,
	/// 孤辰
	GuChen,
	/// 寡宿
	GuaSu,
	/// 劫煞
	JieSha,
	/// 亡神
	WangShen,
	/// 天德贵人
	TianDeGuiRen,
	/// 月德贵人
	YueDeGuiRen,
	/// 金舆
	JinYu,
	/// 魁罡（仅日柱）
	KuiGang,
	/// 十灵日（仅日柱）
	ShiLingRi,
	/// 进神（仅日柱）
	JinShen,
	/// 阴差阳错（仅日柱）
	YinChaYangCuo,
	/// 孤鸾（仅日柱）
	GuLuan,
}

/// 藏干条目：地支分解出的天干片段及固定比例（百分比，单支合计 100）
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, Copy, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct CangGanInfo {
	pub gan: TianGan,
	pub shi_shen: ShiShen,
	/// 固定比例（百分比）
	pub weight: u8,
}

/// 单柱古典注记
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct ZhuAnnotation {
	pub gan_zhi: GanZhi,
	/// 本柱天干相对日主的十神
	pub gan_shi_shen: ShiShen,
	/// 藏干分解（1-3 条，比例合计 100）
	pub cang_gan: BoundedVec<CangGanInfo, ConstU32<3>>,
	/// 纳音索引（0..=29，查 `constants::nayin_name`；干支阴阳错配的直录柱无纳音）
	pub na_yin: Option<u8>,
	/// 日主于本支的十二长生
	pub chang_sheng: ChangSheng,
	/// 本支自坐
	pub zi_zuo: ChangSheng,
	/// 本柱旬空
	pub kong_wang: (DiZhi, DiZhi),
	/// 命中神煞
	pub shen_sha: BoundedVec<ShenSha, ConstU32<16>>,
}

/// 古典排盘记录（记录二）。`(si_zhu, day_master)` 即外部大运推算器的全部输入。
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct ClassicalChart {
	pub si_zhu: SiZhu,
	pub day_master: TianGan,
	pub zhus: [ZhuAnnotation; 4],
}

/// 推演分析记录（记录一）
#[derive(
	Encode, Decode, DecodeWithMemTracking, Clone, PartialEq, Eq,
	RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct ChartAnalysis {
	pub si_zhu: SiZhu,
	pub mbti: MbtiType,
	pub dominant: CognitiveFunction,
	pub auxiliary: CognitiveFunction,
	pub inferior: CognitiveFunction,
	pub ge_ju: GeJu,
	pub qiang_ruo: QiangRuo,
	/// 比印占比（千分比）
	pub peer_share_pm: u16,
	pub yong_shen: YongShenDecision,
	/// 十神能量分布（百分比，按 `ALL_SHI_SHEN` 序，合计恰为 100 或全 0）
	pub shi_shen_distribution: [u8; 10],
	/// 八维功能分布（百分比，按 `ALL_FUNCTIONS` 序，合计恰为 100 或全 0）
	pub function_distribution: [u8; 8],
	/// 十干能量明细（按天干序）
	pub stem_breakdown: [StemEnergy; 10],
}
