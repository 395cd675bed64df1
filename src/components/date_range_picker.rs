use chrono::NaiveDate;
use leptos::either::Either;
use leptos::prelude::*;

use crate::calendar::{MonthCursor, SelectionPhase, WEEKDAY_LABELS, apply_click, presets};
use crate::components::icons::{CHEVRON_LEFT, CHEVRON_RIGHT, Icon};
use crate::search::{DateRange, PickerVariant};

#[component]
pub fn DateRangePicker(
    #[prop(into)] ranges: Signal<DateRange>,
    min_date: NaiveDate,
    #[prop(into)] variant: Signal<PickerVariant>,
    on_change: Callback<DateRange>,
) -> impl IntoView {
    let first_month = MonthCursor::containing(min_date);
    let anchor = RwSignal::new(MonthCursor::containing(
        ranges.get_untracked().start.max(min_date),
    ));
    let phase = RwSignal::new(SelectionPhase::Start);

    let pick_day = Callback::new(move |day: NaiveDate| {
        let (next, next_phase) = apply_click(ranges.get_untracked(), phase.get_untracked(), day);
        phase.set(next_phase);
        on_change.run(next);
    });

    view! {
        <div class="flex flex-col sm:flex-row gap-4 p-3 bg-white rounded-lg">
            <Show when=move || variant.get().shows_presets()>
                <ul class="flex flex-col gap-1 pr-3 text-sm border-r border-gray-200">
                    {presets(min_date)
                        .into_iter()
                        .map(|preset| {
                            let range = preset.range;
                            let preset_class = move || {
                                if ranges.get() == range {
                                    "w-full px-3 py-1 text-left rounded text-red-400 bg-red-50"
                                } else {
                                    "w-full px-3 py-1 text-left rounded hover:bg-gray-100"
                                }
                            };
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        class=preset_class
                                        on:click=move |_| {
                                            phase.set(SelectionPhase::Start);
                                            anchor.set(MonthCursor::containing(range.start));
                                            on_change.run(range);
                                        }
                                    >
                                        {preset.label}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
            <div class="flex flex-col gap-2">
                <div class="flex items-center justify-between">
                    <button
                        type="button"
                        class="p-1 rounded hover:bg-gray-100 disabled:opacity-30"
                        disabled={move || anchor.get() <= first_month}
                        on:click=move |_| anchor.update(|month| *month = month.prev())
                    >
                        <Icon path=CHEVRON_LEFT class="h-5 w-5" />
                    </button>
                    <button
                        type="button"
                        class="p-1 rounded hover:bg-gray-100"
                        on:click=move |_| anchor.update(|month| *month = month.next())
                    >
                        <Icon path=CHEVRON_RIGHT class="h-5 w-5" />
                    </button>
                </div>
                <div class="flex gap-6">
                    {move || {
                        let mut month = anchor.get();
                        let mut months = Vec::new();
                        for _ in 0..variant.get().months() {
                            months.push(month);
                            month = month.next();
                        }
                        months
                            .into_iter()
                            .map(|month| {
                                view! {
                                    <MonthGrid
                                        month=month
                                        ranges=ranges
                                        min_date=min_date
                                        on_pick=pick_day
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn MonthGrid(
    month: MonthCursor,
    ranges: Signal<DateRange>,
    min_date: NaiveDate,
    on_pick: Callback<NaiveDate>,
) -> impl IntoView {
    view! {
        <div class="w-64">
            <p class="mb-2 font-semibold text-center">{month.label()}</p>
            <div class="grid grid-cols-7 text-xs text-center text-gray-400">
                {WEEKDAY_LABELS
                    .iter()
                    .map(|label| view! { <span>{*label}</span> })
                    .collect_view()}
            </div>
            <div class="grid grid-cols-7 gap-y-1 text-sm">
                {month
                    .grid()
                    .into_iter()
                    .map(|cell| match cell {
                        None => Either::Left(view! { <span class="h-9 w-9"></span> }),
                        Some(day) => {
                            Either::Right(
                                view! {
                                    <button
                                        type="button"
                                        class=move || day_class(day, ranges.get(), min_date)
                                        disabled={day < min_date}
                                        on:click=move |_| on_pick.run(day)
                                    >
                                        {day.format("%-d").to_string()}
                                    </button>
                                },
                            )
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn day_class(day: NaiveDate, range: DateRange, min_date: NaiveDate) -> &'static str {
    if day < min_date {
        "h-9 w-9 text-gray-300 cursor-not-allowed"
    } else if day == range.start || day == range.end {
        "h-9 w-9 rounded-full bg-red-400 text-white"
    } else if range.contains(day) {
        "h-9 w-9 bg-red-100 text-gray-700"
    } else {
        "h-9 w-9 rounded-full text-gray-700 hover:bg-gray-100"
    }
}
