mod state;

use crate::layout::notification_service::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::record_form::{confirm_and_remove, delete_question};
use crate::system::users::ui::details::UserDetails;
use contracts::shared::i18n::t;
use contracts::shared::record_list::RecordList;
use contracts::system::roles::Role;
use contracts::system::users::{User, UserId};
use leptos::prelude::*;
use state::{UserSortField, UsersListState};
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn UsersList(
    users: RwSignal<RecordList<User>>,
    roles: RwSignal<RecordList<Role>>,
) -> impl IntoView {
    let notifications = use_notifications();
    let state = RwSignal::new(UsersListState::default());
    let editing = RwSignal::new(None::<Option<UserId>>);
    let search_signal = RwSignal::new(String::new());

    Effect::new(move |_| {
        let query = search_signal.get();
        state.update(|s| s.search_query = query);
    });

    let rows = move || {
        let state = state.get();
        users.with(|list| {
            let mut visible: Vec<&User> = list.iter().filter(|u| state.matches(u)).collect();
            visible.sort_by(|a, b| state.compare(a, b));
            visible
                .into_iter()
                .map(|u| {
                    let id = u.id;
                    let username = u.username.clone();
                    let is_active = u.is_active;
                    let username_label = username.clone();
                    let full_name = u.full_name.clone().unwrap_or_default();
                    let email = u.email.clone().unwrap_or_default();
                    let created_at = u.created_at.format("%d.%m.%Y").to_string();
                    let role = u
                        .role_id
                        .map(|role_id| {
                            roles.with(|l| {
                                l.get(role_id)
                                    .map(|r| r.name.clone())
                                    .unwrap_or_else(|| "роль удалена".to_string())
                            })
                        })
                        .unwrap_or_else(|| "—".to_string());
                    view! {
                        <TableRow>
                            <TableCell>
                                <TableCellLayout truncate=true>
                                    <span style="font-weight: 500;">{username_label}</span>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>{full_name}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>{email}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>{role}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <Badge
                                        appearance=BadgeAppearance::Tint
                                        color=if is_active { BadgeColor::Success } else { BadgeColor::Danger }
                                    >
                                        {if is_active { "Активен" } else { "Заблокирован" }}
                                    </Badge>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>{created_at}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| editing.set(Some(Some(id)))
                                    attr:title=t("action.edit")
                                >
                                    {icon("edit")}
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| {
                                        confirm_and_remove(users, id, &delete_question(&username), notifications);
                                    }
                                    attr:title=t("action.delete")
                                >
                                    {icon("delete")}
                                </Button>
                            </TableCell>
                        </TableRow>
                    }
                })
                .collect_view()
        })
    };

    let header = move |field: UserSortField, label: &'static str| {
        view! {
            <TableHeaderCell resizable=false>
                <div
                    class="table__sortable-header"
                    style="cursor:pointer;"
                    on:click=move |_| state.update(|s| s.toggle_sort(field))
                >
                    {label}
                    <span>{move || state.with(|s| s.sort_indicator(field))}</span>
                </div>
            </TableHeaderCell>
        }
    };

    view! {
        <div class="section" id="sys_users--list">
            <PageHeader
                title="Пользователи"
                subtitle=Signal::derive(move || format!("Всего: {}", users.with(|l| l.len())))
            >
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="flex: 1; max-width: 320px;">
                        <Input value=search_signal placeholder="Логин, имя или Email..." />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(None))
                    >
                        {icon("plus")}
                        {t("action.create")}
                    </Button>
                </Flex>
            </PageHeader>

            <div class="table-wrapper">
                <Table attr:id="sys_users" attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {header(UserSortField::Username, "Логин")}
                            {header(UserSortField::FullName, "Имя")}
                            <TableHeaderCell resizable=false min_width=160.0>"Email"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Роль"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Состояние"</TableHeaderCell>
                            {header(UserSortField::CreatedAt, "Создан")}
                            <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{rows}</TableBody>
                </Table>
            </div>

            {move || editing.get().map(|id| view! {
                <UserDetails
                    list=users
                    roles=roles
                    id=id
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
        </div>
    }
}
