//! # 八字推演引擎 Pallet (Pallet Bazi Engine)
//!
//! ## 概述
//!
//! 本 Pallet 实现确定性的八字推演引擎，包括：
//! - 四柱排盘（公历时间解析或四柱直录）
//! - 会局检出与合冲交互解算
//! - 季节加权、流通调整与十干能量聚合
//! - 格局判定、强弱分档与用神仲裁
//! - 八维认知功能映射与十六型人格标签
//! - 古典注记（十神、藏干、纳音、长生、旬空、神煞）
//!
//! ## 技术特性
//!
//! - **全整数定点运算**: 能量厘点 / 乘数百分比 / 占比千分比，
//!   同一四柱在任何节点上必然得到逐位相同的结果
//! - **存储精简**: 链上只存四柱索引，分析与古典盘经 Runtime API 实时重算
//! - **规则版本化**: 全部定数集中于 `constants`，随 `RULESET_VERSION` 演进
//!
//! ## 使用示例
//!
//! ```ignore
//! // 公历输入（提供经度则按真太阳时修正时柱）
//! BaziEngine::create_chart(
//!     origin,
//!     ChartInput::Solar { year: 1990, month: 1, day: 1, hour: 12, minute: 0, longitude: Some(1_164_000) },
//! )?;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;

#[cfg(test)]
mod tests;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod calculations;
pub mod calendar;
pub mod constants;
pub mod interpretation;
pub mod runtime_api;
pub mod types;

pub use types::{ChartAnalysis, ChartInput, ClassicalChart, SiZhu};

#[frame_support::pallet]
pub mod pallet {
	use frame_support::pallet_prelude::*;
	use frame_system::pallet_prelude::*;

	use crate::types::*;
	use crate::weights::WeightInfo;

	/// Pallet 配置 Trait
	#[pallet::config]
	pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
		/// 权重信息
		type WeightInfo: WeightInfo;

		/// 每个账户最多保存的命盘数量
		#[pallet::constant]
		type MaxChartsPerAccount: Get<u32> + Clone + core::fmt::Debug;
	}

	#[pallet::pallet]
	pub struct Pallet<T>(_);

	/// 链上命盘记录：只存四柱索引，计算数据经 Runtime API 实时重算
	#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
	#[scale_info(skip_type_params(T))]
	pub struct ChartRecord<T: Config> {
		pub owner: T::AccountId,
		pub si_zhu: SiZhu,
		pub created_at: BlockNumberFor<T>,
	}

	/// 下一个命盘ID计数器
	#[pallet::storage]
	#[pallet::getter(fn next_chart_id)]
	pub type NextChartId<T: Config> = StorageValue<_, u64, ValueQuery>;

	/// 存储映射: 命盘ID -> 命盘记录
	#[pallet::storage]
	#[pallet::getter(fn chart_by_id)]
	pub type ChartById<T: Config> = StorageMap<_, Blake2_128Concat, u64, ChartRecord<T>>;

	/// 存储映射: 用户 -> 命盘ID列表
	#[pallet::storage]
	#[pallet::getter(fn user_charts)]
	pub type UserCharts<T: Config> = StorageMap<
		_,
		Blake2_128Concat,
		T::AccountId,
		BoundedVec<u64, T::MaxChartsPerAccount>,
		ValueQuery,
	>;

	/// Pallet 事件
	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// 命盘创建成功 [所有者, 命盘ID, 四柱]
		ChartCreated { owner: T::AccountId, chart_id: u64, si_zhu: SiZhu },
		/// 命盘删除 [所有者, 命盘ID]
		ChartDeleted { owner: T::AccountId, chart_id: u64 },
	}

	/// Pallet 错误
	#[pallet::error]
	pub enum Error<T> {
		/// 无效的公历时刻（超出支持年份、历法非法或时分越界）
		InvalidDate,
		/// 四柱直录长度不等于 4
		InvalidDirectInput,
		/// 命盘未找到
		ChartNotFound,
		/// 非命盘所有者
		NotChartOwner,
		/// 命盘数量过多
		TooManyCharts,
		/// 命盘ID已达到最大值
		ChartIdOverflow,
	}

	/// Pallet 可调用函数
	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// 创建命盘
		///
		/// 两种输入方式二选一：
		/// - **公历时刻** (`Solar`): 引擎按立春/节界排四柱，
		///   提供经度时以真太阳时修正时柱
		/// - **四柱直录** (`Direct`): 四干四支原样接受，不校验
		///   干支搭配是否出现在六十甲子历法中
		///
		/// 链上只存四柱索引与所有者，分析结果经 Runtime API 免费重算。
		#[pallet::call_index(0)]
		#[pallet::weight(T::WeightInfo::create_chart())]
		pub fn create_chart(origin: OriginFor<T>, input: ChartInput) -> DispatchResult {
			let who = ensure_signed(origin)?;

			let existing = UserCharts::<T>::get(&who);
			ensure!(
				existing.len() < T::MaxChartsPerAccount::get() as usize,
				Error::<T>::TooManyCharts
			);

			let si_zhu = Self::resolve_input(&input)?;

			let chart_id = NextChartId::<T>::get();
			ensure!(chart_id < u64::MAX, Error::<T>::ChartIdOverflow);

			ChartById::<T>::insert(
				chart_id,
				ChartRecord {
					owner: who.clone(),
					si_zhu,
					created_at: frame_system::Pallet::<T>::block_number(),
				},
			);

			UserCharts::<T>::try_mutate(&who, |charts| {
				charts.try_push(chart_id).map_err(|_| Error::<T>::TooManyCharts)
			})?;

			NextChartId::<T>::put(chart_id + 1);

			Self::deposit_event(Event::ChartCreated { owner: who, chart_id, si_zhu });

			Ok(())
		}

		/// 删除命盘
		///
		/// 只有命盘所有者可以删除自己的命盘。
		#[pallet::call_index(1)]
		#[pallet::weight(T::WeightInfo::delete_chart())]
		pub fn delete_chart(origin: OriginFor<T>, chart_id: u64) -> DispatchResult {
			let who = ensure_signed(origin)?;

			let record = ChartById::<T>::get(chart_id).ok_or(Error::<T>::ChartNotFound)?;
			ensure!(record.owner == who, Error::<T>::NotChartOwner);

			ChartById::<T>::remove(chart_id);
			UserCharts::<T>::mutate(&who, |charts| {
				if let Some(pos) = charts.iter().position(|&id| id == chart_id) {
					charts.remove(pos);
				}
			});

			Self::deposit_event(Event::ChartDeleted { owner: who, chart_id });

			Ok(())
		}
	}

	// 辅助函数
	impl<T: Config> Pallet<T> {
		/// 解析输入为四柱
		pub fn resolve_input(input: &ChartInput) -> Result<SiZhu, Error<T>> {
			match input {
				ChartInput::Solar { year, month, day, hour, minute, longitude } => {
					crate::calendar::resolve(*year, *month, *day, *hour, *minute, *longitude)
						.ok_or(Error::<T>::InvalidDate)
				},
				ChartInput::Direct { gans, zhis } => {
					// 长度不等于 4 一律拒绝，不做补齐或截断
					ensure!(gans.len() == 4 && zhis.len() == 4, Error::<T>::InvalidDirectInput);
					Ok(SiZhu {
						year: GanZhi { gan: gans[0], zhi: zhis[0] },
						month: GanZhi { gan: gans[1], zhi: zhis[1] },
						day: GanZhi { gan: gans[2], zhi: zhis[2] },
						hour: GanZhi { gan: gans[3], zhi: zhis[3] },
					})
				},
			}
		}

		/// RPC 接口：实时推演分析记录（记录一）
		///
		/// 由 Runtime API 调用，不消耗 gas，不上链；
		/// 算法随规则版本自动更新，结果不永久存储。
		pub fn analysis_of(chart_id: u64) -> Option<ChartAnalysis> {
			let record = ChartById::<T>::get(chart_id)?;
			Some(crate::interpretation::analyze(&record.si_zhu))
		}

		/// RPC 接口：实时生成古典排盘记录（记录二）
		pub fn classical_chart_of(chart_id: u64) -> Option<ClassicalChart> {
			let record = ChartById::<T>::get(chart_id)?;
			Some(crate::interpretation::build_classical_chart(&record.si_zhu))
		}

		/// RPC 接口：免存储试算，输入即出双记录
		pub fn preview(input: &ChartInput) -> Option<(ChartAnalysis, ClassicalChart)> {
			let si_zhu = Self::resolve_input(input).ok()?;
			Some((
				crate::interpretation::analyze(&si_zhu),
				crate::interpretation::build_classical_chart(&si_zhu),
			))
		}
	}
}
