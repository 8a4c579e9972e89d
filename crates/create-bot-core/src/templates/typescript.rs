//! TypeScript template variant
//!
//! TypeScript sources are authored with literal import/export syntax; only
//! the `{name}` entry file and the ignore file carry placeholders.

use super::Template;
use crate::tree::Directory;

pub(super) fn template() -> Template {
    Template {
        name: "typescript",
        main: "dist/{name}.js",
        scripts: &[
            ("lint", "eslint src --ext ts --fix"),
            ("format", "prettier --write \"src/**/*.ts\""),
            ("build", "tsc -b src"),
            ("clean", "tsc -b src --clean"),
            ("watch", "tsc -b src -w"),
        ],
        dependencies: &[
            "discord.js",
            "@sapphire/framework",
            "@sapphire/decorators",
            "@sapphire/plugin-logger",
        ],
        dev_dependencies: &[
            "@sapphire/eslint-config",
            "@sapphire/prettier-config",
            "@sapphire/ts-config",
            "@types/node",
            "@types/ws",
            "typescript",
        ],
        files: files(),
    }
}

fn files() -> Directory {
    Directory::new(":root-typescript")
        .file_lines(
            ".gitignore",
            [
                "# Ignore a blackhole and the folder for development",
                "node_modules/",
                ".vs/",
                ".idea/",
                "*.iml",
                "",
                "# Environment variables",
                ".DS_Store",
                "",
                "dist/",
                "*.js",
                "",
                "# Ignore the config file (contains sensitive information such as tokens)",
                "config.ts",
                "",
                "# Ignore heapsnapshot and log files",
                "*.heapsnapshot",
                "*.log",
                "",
                "# Ignore package locks",
                "{ignored-package-locks}",
            ],
        )
        .file_lines(
            "tsconfig.base.json",
            ["{", "\t\"extends\": \"@sapphire/ts-config\"", "}"],
        )
        .file_lines(
            "tsconfig.eslint.json",
            [
                "{",
                "\t\"extends\": \"./tsconfig.base.json\",",
                "\t\"include\": [\"src\"]",
                "}",
            ],
        )
        .dir("src", |src| {
            src.dir("commands", |commands| {
                commands.dir("General", |general| {
                    general.file_lines(
                        "ping.ts",
                        [
                            "import { ApplyOptions } from '@sapphire/decorators';",
                            "import type { Message } from 'discord.js';",
                            "import { Command, CommandOptions } from '@sapphire/framework';",
                            "",
                            "@ApplyOptions<CommandOptions>({",
                            "\taliases: ['pong']",
                            "})",
                            "export class UserCommand extends Command {",
                            "\tpublic async run(message: Message, args: Command.Args) {",
                            "\t\tconst msg = await message.channel.send('Ping...');",
                            "\t\treturn message.send(`Pong! Took: ${msg.createdTimestamp - message.createdTimestamp}ms!`);",
                            "\t}",
                            "}",
                        ],
                    )
                })
            })
            .dir("events", |events| {
                events.file_lines(
                    "mentionPrefixOnly.ts",
                    [
                        "import { Event, Events } from '@sapphire/framework';",
                        "import type { Message } from 'discord.js';",
                        "",
                        "export class UserEvent extends Event<Events.MentionPrefixOnly> {",
                        "\tpublic async run(message: Message) {",
                        "\t\tconst prefix = '$';",
                        "\t\treturn message.channel.send(prefix ? `My prefix in this guild is: \\`${prefix}\\`` : 'You do not need a prefix in DMs.');",
                        "\t}",
                        "}",
                    ],
                )
            })
            .file_lines(
                "{name}.ts",
                [
                    "import { LogLevel, SapphireClient } from '@sapphire/framework';",
                    "import '@sapphire/plugin-logger/register';",
                    "import { BOT_TOKEN } from './config{import-extension}';",
                    "",
                    "const client = new SapphireClient({",
                    "\tdefaultPrefix: '$',",
                    "\tcaseInsensitiveCommands: true,",
                    "\tlogger: {",
                    "\t\tlevel: LogLevel.Trace",
                    "\t},",
                    "\tshards: 'auto',",
                    "\tws: {",
                    "\t\tintents: [",
                    "\t\t\t'GUILDS',",
                    "\t\t\t'GUILD_BANS',",
                    "\t\t\t'GUILD_EMOJIS',",
                    "\t\t\t'GUILD_VOICE_STATES',",
                    "\t\t\t'GUILD_MESSAGES',",
                    "\t\t\t'GUILD_MESSAGE_REACTIONS',",
                    "\t\t\t'DIRECT_MESSAGES',",
                    "\t\t\t'DIRECT_MESSAGE_REACTIONS'",
                    "\t\t]",
                    "\t}",
                    "});",
                    "",
                    "async function main() {",
                    "\ttry {",
                    "\t\tclient.logger.info('Logging in');",
                    "\t\tawait client.login(BOT_TOKEN);",
                    "\t\tclient.logger.info('Logged in');",
                    "\t} catch (error) {",
                    "\t\tclient.logger.fatal(error);",
                    "\t\tclient.destroy();",
                    "\t\tprocess.exit(1);",
                    "\t}",
                    "};",
                    "",
                    "main();",
                ],
            )
            .file("config.example.ts", "export const BOT_TOKEN = '';")
            .file_lines(
                "tsconfig.json",
                [
                    "{",
                    "\t\"extends\": \"../tsconfig.base.json\",",
                    "\t\"compilerOptions\": {",
                    "\t\t\"rootDir\": \"./\",",
                    "\t\t\"outDir\": \"../dist\",",
                    "\t\t\"composite\": true",
                    "\t},",
                    "\t\"include\": [\".\"]",
                    "}",
                ],
            )
        })
}
